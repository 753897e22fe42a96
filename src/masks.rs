//! Static bit masks over the 64 positions of a truth table word.
//!
//! Position `t` of a word encodes the assignment of variables 0 to 5 given by the bits of `t`.

/// `COFACTOR_MASKS[i]` selects the positions where variable `i` is 1.
pub(crate) const COFACTOR_MASKS: [u64; 6] = [
    0xAAAAAAAAAAAAAAAA,
    0xCCCCCCCCCCCCCCCC,
    0xF0F0F0F0F0F0F0F0,
    0xFF00FF00FF00FF00,
    0xFFFF0000FFFF0000,
    0xFFFFFFFF00000000,
];

/// For `i > j`, selects the positions where `x_i = 0` and `x_j = 1`.
///
/// Shifting by `2^i - 2^j` pairs them with the positions where `x_i = 1` and `x_j = 0`.
pub(crate) const SYM_MASKS_SAME_PHASE: [u64; 15] = [
    0x2222222222222222, // 1, 0
    0x0A0A0A0A0A0A0A0A, // 2, 0
    0x0C0C0C0C0C0C0C0C, // 2, 1
    0x00AA00AA00AA00AA, // 3, 0
    0x00CC00CC00CC00CC, // 3, 1
    0x00F000F000F000F0, // 3, 2
    0x0000AAAA0000AAAA, // 4, 0
    0x0000CCCC0000CCCC, // 4, 1
    0x0000F0F00000F0F0, // 4, 2
    0x0000FF000000FF00, // 4, 3
    0x00000000AAAAAAAA, // 5, 0
    0x00000000CCCCCCCC, // 5, 1
    0x00000000F0F0F0F0, // 5, 2
    0x00000000FF00FF00, // 5, 3
    0x00000000FFFF0000, // 5, 4
];

/// For `i > j`, selects the positions where `x_i = 0` and `x_j = 0`.
///
/// Shifting by `2^i + 2^j` pairs them with the positions where both are 1.
pub(crate) const SYM_MASKS_OPPOSITE_PHASE: [u64; 15] = [
    0x1111111111111111, // 1, 0
    0x0505050505050505, // 2, 0
    0x0303030303030303, // 2, 1
    0x0055005500550055, // 3, 0
    0x0033003300330033, // 3, 1
    0x000F000F000F000F, // 3, 2
    0x0000555500005555, // 4, 0
    0x0000333300003333, // 4, 1
    0x00000F0F00000F0F, // 4, 2
    0x000000FF000000FF, // 4, 3
    0x0000000055555555, // 5, 0
    0x0000000033333333, // 5, 1
    0x000000000F0F0F0F, // 5, 2
    0x0000000000FF00FF, // 5, 3
    0x000000000000FFFF, // 5, 4
];

/// `WEIGHT_MASKS[w]` selects the positions whose index has Hamming weight `w`.
pub(crate) const WEIGHT_MASKS: [u64; 7] = [
    0x0000000000000001,
    0x0000000100010116,
    0x0001011601161668,
    0x0116166816686880,
    0x1668688068808000,
    0x6880800080000000,
    0x8000000000000000,
];

/// Index of the pair `(i, j)`, `i > j`, in the pairwise symmetry tables.
#[inline]
pub(crate) const fn sym_index(i: usize, j: usize) -> usize {
    (i * (i - 1)) / 2 + j
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn positions_where(predicate: impl Fn(usize) -> bool) -> u64 {
        (0..64)
            .filter(|&t| predicate(t))
            .fold(0u64, |mask, t| mask | (1 << t))
    }

    #[test]
    fn test_cofactor_masks() {
        for (var, mask) in COFACTOR_MASKS.iter().enumerate() {
            assert_eq!(*mask, positions_where(|t| t & (1 << var) != 0));
            assert_eq!(mask.count_ones(), 32);
        }
    }

    #[test]
    fn test_sym_masks() {
        for (j, i) in (0..6).tuple_combinations() {
            let index = sym_index(i, j);
            let bit_i = 1 << i;
            let bit_j = 1 << j;
            assert_eq!(
                SYM_MASKS_SAME_PHASE[index],
                positions_where(|t| t & bit_i == 0 && t & bit_j != 0),
                "same phase mask for ({}, {})",
                i,
                j
            );
            assert_eq!(
                SYM_MASKS_OPPOSITE_PHASE[index],
                positions_where(|t| t & bit_i == 0 && t & bit_j == 0),
                "opposite phase mask for ({}, {})",
                i,
                j
            );
            assert_eq!(SYM_MASKS_SAME_PHASE[index].count_ones(), 16);
            assert_eq!(SYM_MASKS_OPPOSITE_PHASE[index].count_ones(), 16);
        }
    }

    #[test]
    fn test_sym_index_is_dense() {
        let indexes = (0..6)
            .tuple_combinations()
            .map(|(j, i)| sym_index(i, j))
            .sorted()
            .collect::<Vec<_>>();
        assert_eq!(indexes, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_weight_masks() {
        let mut union = 0u64;
        for (weight, mask) in WEIGHT_MASKS.iter().enumerate() {
            assert_eq!(
                *mask,
                positions_where(|t| (t as u32).count_ones() as usize == weight)
            );
            assert_eq!(
                mask.count_ones() as u64,
                num_integer::binomial(6u64, weight as u64)
            );
            assert_eq!(union & mask, 0);
            union |= mask;
        }
        assert_eq!(union, u64::MAX);
    }
}
