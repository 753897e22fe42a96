//! Iterators for truth tables.

use crate::TruthTable;

/// Iterator over the successive truth values of a [TruthTable].
///
/// Example:
/// ```rust
/// use npn_truth_table::TruthTable;
///
/// let function = TruthTable::from_hex_string_truth_table("1e").unwrap();
/// let mut iterator = function.iter();
/// assert_eq!(iterator.next(), Some(false));
/// assert_eq!(iterator.next(), Some(true));
/// assert_eq!(iterator.next(), Some(true));
/// assert_eq!(iterator.next(), Some(true));
/// assert_eq!(iterator.next(), Some(true));
/// assert_eq!(iterator.next(), Some(false));
/// assert_eq!(iterator.next(), Some(false));
/// assert_eq!(iterator.next(), Some(false));
/// assert_eq!(iterator.next(), None);
/// ```
pub struct TruthTableIterator<'a> {
    current_index: usize,
    end_index: usize,
    inner_truth_table: &'a TruthTable,
}

impl<'a> TruthTableIterator<'a> {
    pub(crate) fn new(truth_table: &'a TruthTable) -> Self {
        let end_index = if truth_table.is_valid() {
            1 << truth_table.variables_count()
        } else {
            0
        };
        TruthTableIterator {
            current_index: 0,
            end_index,
            inner_truth_table: truth_table,
        }
    }
}

impl Iterator for TruthTableIterator<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.end_index {
            return None;
        }
        let result = self.inner_truth_table.value_at(self.current_index);
        self.current_index += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end_index - self.current_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TruthTableIterator<'_> {}

#[cfg(test)]
mod tests {
    use crate::TruthTable;

    #[test]
    fn test_truth_table_iterator() {
        let function = TruthTable::from_binary_string("10001000").unwrap();
        let mut iterator = function.iter();
        assert_eq!(iterator.len(), 8);
        assert_eq!(iterator.next(), Some(false));
        assert_eq!(iterator.next(), Some(false));
        assert_eq!(iterator.next(), Some(false));
        assert_eq!(iterator.next(), Some(true));
        assert_eq!(iterator.len(), 4);
        assert_eq!(iterator.filter(|value| *value).count(), 1);

        let function = TruthTable::one(9).unwrap();
        assert_eq!(function.iter().count(), 512);
        assert!(function.iter().all(|value| value));

        assert_eq!(TruthTable::invalid().iter().next(), None);
    }
}
