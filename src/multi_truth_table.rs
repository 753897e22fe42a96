use crate::multi_var_map::MultiVarMap;
use crate::truth_table_error::{
    TruthTableError, DIFFERENT_SHAPE_PANIC_MSG, OUTPUT_OUT_OF_RANGE_PANIC_MSG,
};
use crate::utils::{
    block, block_count, check_variable_index, read_i64, read_u64, shift, word_mask, write_i64,
    write_u64, MAX_VARIABLES_COUNT,
};
use crate::TruthTable;
use itertools::Itertools;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::io::{Read, Write};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Truth tables of several Boolean functions sharing the same inputs.
///
/// Output $k$ is stored as the contiguous word segment $k$, laid out like a [TruthTable].
///
/// # Example
/// ```rust
/// use npn_truth_table::{MultiTruthTable, TruthTable};
///
/// let x0 = TruthTable::positive_literal(2, 0).unwrap();
/// let x1 = TruthTable::positive_literal(2, 1).unwrap();
/// let half_adder = MultiTruthTable::from_outputs(&[&x0 ^ &x1, &x0 & &x1]).unwrap();
/// assert_eq!(half_adder.to_string(), "0110|1000");
/// assert!(half_adder.value(1, 3));
/// assert_eq!(half_adder.output(0).to_string(), "0110");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiTruthTable {
    variables_count: usize,
    outputs_count: usize,
    truth_table: Vec<u64>,
}

impl MultiTruthTable {
    /// Every output constant 0.
    ///
    /// # Returns
    /// The table, or an error if `variables_count` is too big or `outputs_count` is 0.
    pub fn zero(variables_count: usize, outputs_count: usize) -> Result<Self, TruthTableError> {
        if variables_count > MAX_VARIABLES_COUNT {
            return Err(TruthTableError::TooBigVariableCount(MAX_VARIABLES_COUNT));
        }
        if outputs_count == 0 {
            return Err(TruthTableError::EmptyOutputList);
        }
        Ok(MultiTruthTable {
            variables_count,
            outputs_count,
            truth_table: vec![0; block_count(variables_count) * outputs_count],
        })
    }

    /// Concatenates single-output functions, `outputs[k]` becoming output `k`.
    ///
    /// # Returns
    /// - [TruthTableError::EmptyOutputList] if `outputs` is empty
    /// - [TruthTableError::OutputVariablesCountMismatch] if an output is invalid, or if the outputs have different variable counts
    pub fn from_outputs(outputs: &[TruthTable]) -> Result<Self, TruthTableError> {
        let first = outputs.first().ok_or(TruthTableError::EmptyOutputList)?;
        let variables_count = first.variables_count();
        if outputs
            .iter()
            .any(|output| output.is_invalid() || output.variables_count() != variables_count)
        {
            return Err(TruthTableError::OutputVariablesCountMismatch);
        }
        Ok(MultiTruthTable {
            variables_count,
            outputs_count: outputs.len(),
            truth_table: outputs
                .iter()
                .flat_map(|output| output.blocks().iter().copied())
                .collect(),
        })
    }

    /// Number of inputs.
    #[inline]
    pub fn variables_count(&self) -> usize {
        self.variables_count
    }

    /// Number of outputs.
    #[inline]
    pub fn outputs_count(&self) -> usize {
        self.outputs_count
    }

    /// Number of words per output.
    #[inline]
    pub fn output_block_count(&self) -> usize {
        block_count(self.variables_count)
    }

    /// Every word, output after output.
    pub fn blocks(&self) -> &[u64] {
        &self.truth_table
    }

    #[inline]
    #[cfg_attr(feature = "unsafe_disable_safety_checks", allow(unused_variables))]
    fn check_output_index(&self, output: usize) {
        #[cfg(not(feature = "unsafe_disable_safety_checks"))]
        {
            if output >= self.outputs_count {
                panic!(
                    "{} {}, got {}",
                    OUTPUT_OUT_OF_RANGE_PANIC_MSG, self.outputs_count, output
                );
            }
        }
    }

    fn segment(&self, output: usize) -> &[u64] {
        let segment_size = self.output_block_count();
        &self.truth_table[output * segment_size..(output + 1) * segment_size]
    }

    /// Output `output` as a standalone truth table.
    ///
    /// # Panics
    /// If `output >= outputs_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn output(&self, output: usize) -> TruthTable {
        self.check_output_index(output);
        TruthTable::from_blocks_unchecked(self.variables_count, self.segment(output).to_vec())
    }

    /// Every output as a standalone truth table, in output order.
    pub fn outputs(&self) -> impl Iterator<Item = TruthTable> + '_ {
        (0..self.outputs_count).map(|output| self.output(output))
    }

    /// Truth value of output `output` for the input assignment `input_bits`.
    ///
    /// # Panics
    /// If `output >= outputs_count()` or `input_bits` is greater than $2^n - 1$, and the
    /// `unsafe_disable_safety_checks` feature is not enabled.
    pub fn value(&self, output: usize, input_bits: u32) -> bool {
        self.check_output_index(output);
        #[cfg(not(feature = "unsafe_disable_safety_checks"))]
        {
            if input_bits >> self.variables_count != 0 {
                panic!(
                    "Input bits must be less or equal than {}",
                    (1u32 << self.variables_count) - 1
                );
            }
        }
        let pos = input_bits as usize;
        (self.segment(output)[block(pos)] >> shift(pos)) & 1 != 0
    }

    /// Complements every output in place.
    pub fn invert_inplace(&mut self) -> &mut Self {
        let mask = word_mask(self.variables_count);
        for word in &mut self.truth_table {
            *word = !*word & mask;
        }
        self
    }

    /// Complements every output.
    pub fn invert(&self) -> Self {
        let mut inverted = self.clone();
        inverted.invert_inplace();
        inverted
    }

    fn combine_inplace(&mut self, rhs: &Self, operator: impl Fn(u64, u64) -> u64) -> &mut Self {
        if self.variables_count != rhs.variables_count || self.outputs_count != rhs.outputs_count {
            panic!("{}", DIFFERENT_SHAPE_PANIC_MSG);
        }
        for (word, rhs_word) in self.truth_table.iter_mut().zip(&rhs.truth_table) {
            *word = operator(*word, *rhs_word);
        }
        self
    }

    /// Output-wise AND, in place.
    ///
    /// # Panics
    /// If the tables have different input or output counts.
    pub fn and_inplace(&mut self, rhs: &Self) -> &mut Self {
        self.combine_inplace(rhs, |a, b| a & b)
    }

    /// Output-wise OR, in place.
    ///
    /// # Panics
    /// If the tables have different input or output counts.
    pub fn or_inplace(&mut self, rhs: &Self) -> &mut Self {
        self.combine_inplace(rhs, |a, b| a | b)
    }

    /// Output-wise XOR, in place.
    ///
    /// # Panics
    /// If the tables have different input or output counts.
    pub fn xor_inplace(&mut self, rhs: &Self) -> &mut Self {
        self.combine_inplace(rhs, |a, b| a ^ b)
    }

    /// Replaces every output by its cofactor on `var`, see [TruthTable::cofactor_inplace].
    ///
    /// # Panics
    /// If `var >= variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn cofactor_inplace(&mut self, var: usize, inv: bool) -> &mut Self {
        check_variable_index(var, self.variables_count);
        let segment_size = self.output_block_count();
        for segment in self.truth_table.chunks_mut(segment_size) {
            let mut output = TruthTable::from_blocks_unchecked(self.variables_count, segment.to_vec());
            output.cofactor_inplace(var, inv);
            segment.copy_from_slice(output.blocks());
        }
        self
    }

    /// Cofactor of every output on `var`.
    pub fn cofactor(&self, var: usize, inv: bool) -> Self {
        let mut cofactor = self.clone();
        cofactor.cofactor_inplace(var, inv);
        cofactor
    }

    /// `true` if at least one output depends on `var`.
    ///
    /// # Panics
    /// If `var >= variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn check_sup(&self, var: usize) -> bool {
        check_variable_index(var, self.variables_count);
        self.outputs().any(|output| output.check_sup(var))
    }

    /// `true` if output `output` depends on `var`.
    ///
    /// # Panics
    /// If `output >= outputs_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn check_sup_output(&self, output: usize, var: usize) -> bool {
        self.output(output).check_sup(var)
    }

    /// `true` if every output is symmetric in `var1` and `var2`, see [TruthTable::check_sym].
    ///
    /// # Panics
    /// If a variable index is not less than `variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn check_sym(&self, var1: usize, var2: usize, inv: bool) -> bool {
        check_variable_index(var1, self.variables_count);
        check_variable_index(var2, self.variables_count);
        self.outputs().all(|output| output.check_sym(var1, var2, inv))
    }

    /// `true` if output `output` is symmetric in `var1` and `var2`.
    ///
    /// # Panics
    /// If `output >= outputs_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn check_sym_output(&self, output: usize, var1: usize, var2: usize, inv: bool) -> bool {
        self.output(output).check_sym(var1, var2, inv)
    }

    /// Applies a variable transform to the inputs and the outputs.
    ///
    /// Output `src` of `self`, transformed by the input entries of `map` and complemented if its output entry says so,
    /// becomes output `dst` of the result.
    ///
    /// # Returns
    /// The transformed table, or `None` if `map` does not have the table's shape, or if its output entries are
    /// not a permutation.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::{MultiTruthTable, MultiVarMap};
    ///
    /// let table = MultiTruthTable::from_outputs(&[
    ///     "0110".try_into().unwrap(),
    ///     "1000".try_into().unwrap(),
    /// ]).unwrap();
    /// let mut map = MultiVarMap::identity(2, 2);
    /// map.set_output_map(0, 1, false);
    /// map.set_output_map(1, 0, true);
    /// assert_eq!(table.xform(&map).unwrap().to_string(), "0111|0110");
    /// ```
    pub fn xform(&self, map: &MultiVarMap) -> Option<MultiTruthTable> {
        trace!(
            "xform of a {}x{} table by {}",
            self.variables_count,
            self.outputs_count,
            map
        );
        if map.variables_count() != self.variables_count || map.outputs_count() != self.outputs_count {
            debug!(
                "map of shape {}x{} does not fit a {}x{} table",
                map.variables_count(),
                map.outputs_count(),
                self.variables_count,
                self.outputs_count
            );
            return None;
        }
        let segment_size = self.output_block_count();
        let mut transformed = MultiTruthTable {
            variables_count: self.variables_count,
            outputs_count: self.outputs_count,
            truth_table: vec![0; self.truth_table.len()],
        };
        let mut written = vec![false; self.outputs_count];
        for (src, mapping) in map.output_mappings().enumerate() {
            let Some(dst) = mapping.var() else {
                debug!("output {} is unmapped", src);
                return None;
            };
            if std::mem::replace(&mut written[dst], true) {
                debug!("output {} is targeted twice", dst);
                return None;
            }
            let output = self.output(src).xform(&map.single_output_map(mapping.inv()));
            if output.is_invalid() {
                return None;
            }
            transformed.truth_table[dst * segment_size..(dst + 1) * segment_size]
                .copy_from_slice(output.blocks());
        }
        Some(transformed)
    }

    /// Hash value folding the 32-bit halves of every word, plus the input count and the output count.
    pub fn hash_value(&self) -> u64 {
        self.truth_table
            .iter()
            .fold(0u64, |acc, word| acc ^ (word & 0xffffffff) ^ (word >> 32))
            .wrapping_add(self.variables_count as u64)
            .wrapping_add((self.outputs_count as u64) << 8)
    }

    /// Writes the input count as a signed 64-bit integer, like [TruthTable::dump], then the output count
    /// as an unsigned one, then every word.
    pub fn dump<W: Write>(&self, writer: &mut W) -> Result<(), TruthTableError> {
        write_i64(writer, self.variables_count as i64)?;
        write_u64(writer, self.outputs_count as u64)?;
        for word in &self.truth_table {
            write_u64(writer, *word)?;
        }
        Ok(())
    }

    /// Reads a table written by [MultiTruthTable::dump].
    pub fn restore<R: Read>(reader: &mut R) -> Result<Self, TruthTableError> {
        let variables_count = read_i64(reader)?;
        if !(0..=MAX_VARIABLES_COUNT as i64).contains(&variables_count) {
            return Err(TruthTableError::InvalidSerializedVariablesCount(
                variables_count,
            ));
        }
        let variables_count = variables_count as usize;
        let serialized_outputs_count = read_u64(reader)?;
        let words_count = usize::try_from(serialized_outputs_count)
            .ok()
            .filter(|outputs_count| *outputs_count != 0)
            .and_then(|outputs_count| block_count(variables_count).checked_mul(outputs_count))
            .ok_or(TruthTableError::InvalidSerializedOutputsCount(
                serialized_outputs_count,
            ))?;
        let outputs_count = serialized_outputs_count as usize;
        let mask = word_mask(variables_count);
        let truth_table = (0..words_count)
            .map(|_| {
                let word = read_u64(reader)?;
                if word & !mask != 0 {
                    return Err(TruthTableError::TooBigTruthTableForVarCount);
                }
                Ok(word)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MultiTruthTable {
            variables_count,
            outputs_count,
            truth_table,
        })
    }
}

impl Ord for MultiTruthTable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.variables_count
            .cmp(&other.variables_count)
            .then(self.outputs_count.cmp(&other.outputs_count))
            .then_with(|| {
                self.truth_table
                    .iter()
                    .rev()
                    .cmp(other.truth_table.iter().rev())
            })
    }
}

impl PartialOrd for MultiTruthTable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for MultiTruthTable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

/// Binary string of every output, output 0 first, separated by `|`.
impl Display for MultiTruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.outputs().join("|"))
    }
}

impl Not for &MultiTruthTable {
    type Output = MultiTruthTable;

    fn not(self) -> Self::Output {
        self.invert()
    }
}

impl BitAnd for &MultiTruthTable {
    type Output = MultiTruthTable;

    fn bitand(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.and_inplace(rhs);
        result
    }
}

impl BitAndAssign<&MultiTruthTable> for MultiTruthTable {
    fn bitand_assign(&mut self, rhs: &MultiTruthTable) {
        self.and_inplace(rhs);
    }
}

impl BitOr for &MultiTruthTable {
    type Output = MultiTruthTable;

    fn bitor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.or_inplace(rhs);
        result
    }
}

impl BitOrAssign<&MultiTruthTable> for MultiTruthTable {
    fn bitor_assign(&mut self, rhs: &MultiTruthTable) {
        self.or_inplace(rhs);
    }
}

impl BitXor for &MultiTruthTable {
    type Output = MultiTruthTable;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.xor_inplace(rhs);
        result
    }
}

impl BitXorAssign<&MultiTruthTable> for MultiTruthTable {
    fn bitxor_assign(&mut self, rhs: &MultiTruthTable) {
        self.xor_inplace(rhs);
    }
}

#[cfg(test)]
mod tests {
    use crate::{MultiTruthTable, MultiVarMap, TruthTable, TruthTableError, VarMap};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;
    use test_log::test;

    fn random_table(rng: &mut StdRng, variables_count: usize, outputs_count: usize) -> MultiTruthTable {
        let outputs = (0..outputs_count)
            .map(|_| TruthTable::random(rng, variables_count))
            .collect::<Vec<_>>();
        MultiTruthTable::from_outputs(&outputs).unwrap()
    }

    #[test]
    fn test_from_outputs() {
        let table = MultiTruthTable::from_outputs(&[
            TruthTable::one(7).unwrap(),
            TruthTable::positive_literal(7, 6).unwrap(),
        ])
        .unwrap();
        assert_eq!(table.variables_count(), 7);
        assert_eq!(table.outputs_count(), 2);
        assert_eq!(table.blocks().len(), 4);
        assert_eq!(table.output(0), TruthTable::one(7).unwrap());
        assert_eq!(table.output(1), TruthTable::positive_literal(7, 6).unwrap());
        assert!(table.value(1, 64));
        assert!(!table.value(1, 63));

        assert_eq!(
            MultiTruthTable::from_outputs(&[]),
            Err(TruthTableError::EmptyOutputList)
        );
        assert_eq!(
            MultiTruthTable::from_outputs(&[TruthTable::one(2).unwrap(), TruthTable::one(3).unwrap()]),
            Err(TruthTableError::OutputVariablesCountMismatch)
        );
        assert_eq!(
            MultiTruthTable::from_outputs(&[TruthTable::invalid()]),
            Err(TruthTableError::OutputVariablesCountMismatch)
        );
    }

    #[test]
    fn test_zero() {
        let table = MultiTruthTable::zero(3, 4).unwrap();
        assert_eq!(table.to_string(), "00000000|00000000|00000000|00000000");
        assert!(table.outputs().all(|output| output.is_zero()));
        assert_eq!(
            MultiTruthTable::zero(21, 1),
            Err(TruthTableError::TooBigVariableCount(20))
        );
        assert_eq!(
            MultiTruthTable::zero(3, 0),
            Err(TruthTableError::EmptyOutputList)
        );
    }

    #[test]
    #[should_panic(expected = "Variable index must be less than")]
    #[cfg(not(feature = "unsafe_disable_safety_checks"))]
    fn test_check_sup_out_of_range() {
        MultiTruthTable::zero(3, 2).unwrap().check_sup(7);
    }

    #[test]
    #[should_panic(expected = "Variable index must be less than")]
    #[cfg(not(feature = "unsafe_disable_safety_checks"))]
    fn test_check_sym_out_of_range() {
        MultiTruthTable::zero(3, 2).unwrap().check_sym(1, 12, false);
    }

    #[test]
    #[should_panic(expected = "Variable index must be less than")]
    #[cfg(not(feature = "unsafe_disable_safety_checks"))]
    fn test_cofactor_out_of_range() {
        MultiTruthTable::zero(3, 1).unwrap().cofactor_inplace(11, false);
    }

    #[test]
    #[should_panic(expected = "Output index must be less than")]
    #[cfg(not(feature = "unsafe_disable_safety_checks"))]
    fn test_output_out_of_range() {
        MultiTruthTable::zero(3, 2).unwrap().output(2);
    }

    #[test]
    fn test_bitwise_operators() {
        let mut rng = StdRng::seed_from_u64(30);
        let a = random_table(&mut rng, 8, 3);
        let b = random_table(&mut rng, 8, 3);
        let and = &a & &b;
        let or = &a | &b;
        let xor = &a ^ &b;
        let not = !&a;
        for output in 0..3 {
            assert_eq!(and.output(output), &a.output(output) & &b.output(output));
            assert_eq!(or.output(output), &a.output(output) | &b.output(output));
            assert_eq!(xor.output(output), &a.output(output) ^ &b.output(output));
            assert_eq!(not.output(output), !a.output(output));
        }
        let mut c = a.clone();
        c ^= &a;
        assert_eq!(c, MultiTruthTable::zero(8, 3).unwrap());
        c |= &b;
        c &= &a;
        assert_eq!(c, and);
    }

    #[test]
    #[should_panic]
    fn test_bitwise_shape_mismatch() {
        let _ = &MultiTruthTable::zero(3, 2).unwrap() & &MultiTruthTable::zero(3, 3).unwrap();
    }

    #[test]
    fn test_cofactor_and_structure() {
        let x0 = TruthTable::positive_literal(3, 0).unwrap();
        let x1 = TruthTable::positive_literal(3, 1).unwrap();
        let x2 = TruthTable::positive_literal(3, 2).unwrap();
        let table = MultiTruthTable::from_outputs(&[&x0 & &x1, &x0 ^ &x2]).unwrap();

        assert!(table.check_sup(1));
        assert!(table.check_sup(2));
        assert!(table.check_sup_output(0, 1));
        assert!(!table.check_sup_output(0, 2));
        assert!(!table.check_sup_output(1, 1));

        assert!(table.check_sym_output(0, 0, 1, false));
        assert!(!table.check_sym(0, 1, false));
        assert!(table.check_sym_output(1, 0, 2, false));
        assert!(!table.check_sym(1, 2, false));

        let cofactor = table.cofactor(0, false);
        assert_eq!(cofactor.output(0), x1);
        assert_eq!(cofactor.output(1), !&x2);
        assert!(!cofactor.check_sup(0));
    }

    #[test]
    fn test_cofactor_large() {
        let mut rng = StdRng::seed_from_u64(31);
        let table = random_table(&mut rng, 9, 3);
        for var in 0..9 {
            for inv in [false, true] {
                let cofactor = table.cofactor(var, inv);
                for output in 0..3 {
                    assert_eq!(cofactor.output(output), table.output(output).cofactor(var, inv));
                }
            }
        }
    }

    #[test]
    fn test_xform() {
        let mut rng = StdRng::seed_from_u64(32);
        for variables_count in [2, 5, 8] {
            let table = random_table(&mut rng, variables_count, 3);
            let input_map = VarMap::random_bijection(&mut rng, variables_count);
            let mut map = MultiVarMap::new(variables_count, 3);
            for (src, mapping) in input_map.input_mappings().enumerate() {
                if let Some(var) = mapping.var() {
                    map.set_input_map(src, var, mapping.inv());
                }
            }
            let output_flips = [rng.gen_bool(0.5), rng.gen_bool(0.5), rng.gen_bool(0.5)];
            map.set_output_map(0, 2, output_flips[0]);
            map.set_output_map(1, 0, output_flips[1]);
            map.set_output_map(2, 1, output_flips[2]);

            let transformed = table.xform(&map).unwrap();
            for (src, dst) in [(0, 2), (1, 0), (2, 1)] {
                let mut single = input_map.clone();
                single.set_output_inv(output_flips[src]);
                assert_eq!(transformed.output(dst), table.output(src).xform(&single));
            }

            let inverse = map.inverse().unwrap();
            assert_eq!(transformed.xform(&inverse).unwrap(), table);
            assert_eq!(table.xform(&MultiVarMap::identity(variables_count, 3)).unwrap(), table);
        }
    }

    #[test]
    fn test_xform_rejected() {
        let table = MultiTruthTable::zero(3, 2).unwrap();
        assert_eq!(table.xform(&MultiVarMap::identity(3, 3)), None);
        assert_eq!(table.xform(&MultiVarMap::identity(4, 2)), None);

        let mut map = MultiVarMap::identity(3, 2);
        map.set_output_map(1, 0, false);
        assert_eq!(table.xform(&map), None);
        assert_eq!(table.xform(&MultiVarMap::new(3, 2)), None);
    }

    #[test]
    fn test_order_and_hash() {
        let small = MultiTruthTable::zero(2, 3).unwrap();
        let wide = MultiTruthTable::zero(3, 1).unwrap();
        let high = MultiTruthTable::from_outputs(&[
            TruthTable::zero(2).unwrap(),
            TruthTable::one(2).unwrap(),
        ])
        .unwrap();
        let low = MultiTruthTable::from_outputs(&[
            TruthTable::one(2).unwrap(),
            TruthTable::zero(2).unwrap(),
        ])
        .unwrap();
        assert!(small < wide);
        assert!(low < high);
        assert!(MultiTruthTable::zero(2, 2).unwrap() < low);
        assert_eq!(small.hash_value(), 2 + (3 << 8));

        let set = [small.clone(), wide, small, high.clone(), high]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_dump_restore() {
        let mut rng = StdRng::seed_from_u64(33);
        for (variables_count, outputs_count) in [(0, 1), (4, 2), (6, 3), (11, 2)] {
            let table = random_table(&mut rng, variables_count, outputs_count);
            let mut buffer = Vec::new();
            table.dump(&mut buffer).unwrap();
            assert_eq!(buffer.len(), 16 + 8 * table.blocks().len());
            assert_eq!(MultiTruthTable::restore(&mut buffer.as_slice()).unwrap(), table);
        }

        let mut buffer = Vec::new();
        MultiTruthTable::zero(2, 1).unwrap().dump(&mut buffer).unwrap();
        buffer[16] = 0xff;
        assert_eq!(
            MultiTruthTable::restore(&mut buffer.as_slice()),
            Err(TruthTableError::TooBigTruthTableForVarCount)
        );
        buffer[0] = 21;
        assert_eq!(
            MultiTruthTable::restore(&mut buffer.as_slice()),
            Err(TruthTableError::InvalidSerializedVariablesCount(21))
        );
    }

    #[test]
    fn test_restore_bad_outputs_count() {
        let header = |variables_count: i64, outputs_count: u64| {
            let mut buffer = variables_count.to_le_bytes().to_vec();
            buffer.extend_from_slice(&outputs_count.to_le_bytes());
            buffer
        };
        assert_eq!(
            MultiTruthTable::restore(&mut header(20, u64::MAX).as_slice()),
            Err(TruthTableError::InvalidSerializedOutputsCount(u64::MAX))
        );
        assert_eq!(
            MultiTruthTable::restore(&mut header(20, 1 << 60).as_slice()),
            Err(TruthTableError::InvalidSerializedOutputsCount(1 << 60))
        );
        assert_eq!(
            MultiTruthTable::restore(&mut header(3, 0).as_slice()),
            Err(TruthTableError::InvalidSerializedOutputsCount(0))
        );
        assert_eq!(
            MultiTruthTable::restore(&mut header(-1, 1).as_slice()),
            Err(TruthTableError::InvalidSerializedVariablesCount(-1))
        );
        // a plausible header with missing words
        assert_eq!(
            MultiTruthTable::restore(&mut header(7, 3).as_slice()),
            Err(TruthTableError::Io(std::io::ErrorKind::UnexpectedEof))
        );
    }
}
