//! Structural queries: support, symmetry, unateness, and primitive gate recognition.

use crate::masks::{sym_index, COFACTOR_MASKS, SYM_MASKS_OPPOSITE_PHASE, SYM_MASKS_SAME_PHASE};
use crate::utils::{check_variable_index, VARIABLES_PER_WORD};
use crate::{TruthTable, VarMap};
use log::trace;

/// Monotonicity of a function in one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unateness {
    /// The function does not depend on the variable.
    Independent,
    /// Raising the variable never lowers the function.
    Positive,
    /// Raising the variable never raises the function.
    Negative,
    /// Neither positive nor negative unate.
    Binate,
}

/// Primitive gate recognized by [TruthTable::analyze], once independent inputs are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimType {
    /// Constant 0
    C0,
    /// Constant 1
    C1,
    /// Single positive literal
    Buff,
    /// Single negative literal
    Not,
    /// AND of all inputs
    And,
    /// NAND of all inputs
    Nand,
    /// OR of all inputs
    Or,
    /// NOR of all inputs
    Nor,
    /// XOR of all inputs
    Xor,
    /// XNOR of all inputs
    Xnor,
    /// Any other function
    Other,
}

impl TruthTable {
    /// Checks if the function depends on variable `var`, i.e. if flipping `var` changes its value somewhere.
    ///
    /// Always `false` for the invalid table.
    ///
    /// # Panics
    /// If `var >= variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let and = &TruthTable::positive_literal(3, 0).unwrap() & &TruthTable::positive_literal(3, 1).unwrap();
    /// assert!(and.check_sup(0));
    /// assert!(and.check_sup(1));
    /// assert!(!and.check_sup(2));
    /// ```
    pub fn check_sup(&self, var: usize) -> bool {
        if self.is_invalid() {
            return false;
        }
        check_variable_index(var, self.variables_count());
        let blocks = self.blocks();
        if var < VARIABLES_PER_WORD {
            let distance = 1 << var;
            let mask = COFACTOR_MASKS[var];
            blocks
                .iter()
                .any(|word| (word ^ (word << distance)) & mask != 0)
        } else {
            let bit = 1usize << (var - VARIABLES_PER_WORD);
            (0..blocks.len())
                .filter(|block_index| block_index & bit != 0)
                .any(|block_index| blocks[block_index] != blocks[block_index ^ bit])
        }
    }

    /// Checks if the function is unchanged by swapping variables `var1` and `var2`.
    ///
    /// With `inv == true`, both variables are also complemented by the swap, i.e. the check is
    /// $f(.., x_i, .., x_j, ..) = f(.., \overline{x_j}, .., \overline{x_i}, ..)$.
    ///
    /// Always `false` for the invalid table.
    ///
    /// # Panics
    /// If a variable index is not less than `variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let function = TruthTable::from_binary_string("0010").unwrap(); // x0.~x1
    /// assert!(!function.check_sym(0, 1, false));
    /// assert!(function.check_sym(0, 1, true));
    /// ```
    pub fn check_sym(&self, var1: usize, var2: usize, inv: bool) -> bool {
        if self.is_invalid() {
            return false;
        }
        check_variable_index(var1, self.variables_count());
        check_variable_index(var2, self.variables_count());
        if var1 == var2 {
            return !inv || !self.check_sup(var1);
        }
        let (i, j) = if var1 > var2 {
            (var1, var2)
        } else {
            (var2, var1)
        };
        let blocks = self.blocks();
        if i < VARIABLES_PER_WORD {
            let index = sym_index(i, j);
            let (mask, distance) = if inv {
                (SYM_MASKS_OPPOSITE_PHASE[index], (1 << i) + (1 << j))
            } else {
                (SYM_MASKS_SAME_PHASE[index], (1 << i) - (1 << j))
            };
            blocks
                .iter()
                .all(|word| ((word >> distance) ^ word) & mask == 0)
        } else if j < VARIABLES_PER_WORD {
            let bit_i = 1usize << (i - VARIABLES_PER_WORD);
            let distance = 1 << j;
            let mask = !COFACTOR_MASKS[j];
            let condition = if inv { 0 } else { bit_i };
            (0..blocks.len())
                .filter(|block_index| block_index & bit_i == condition)
                .all(|block_index| {
                    (blocks[block_index] ^ (blocks[block_index ^ bit_i] >> distance)) & mask == 0
                })
        } else {
            let bit_i = 1usize << (i - VARIABLES_PER_WORD);
            let bit_j = 1usize << (j - VARIABLES_PER_WORD);
            let both = bit_i | bit_j;
            let condition = if inv { 0 } else { bit_j };
            (0..blocks.len())
                .filter(|block_index| block_index & both == condition)
                .all(|block_index| blocks[block_index] == blocks[block_index ^ both])
        }
    }

    /// Monotonicity of the function in variable `var`.
    ///
    /// [Unateness::Independent] for the invalid table.
    ///
    /// # Panics
    /// If `var >= variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn check_unate(&self, var: usize) -> Unateness {
        if self.is_invalid() {
            return Unateness::Independent;
        }
        check_variable_index(var, self.variables_count());
        let blocks = self.blocks();
        // (f restricted to x_var = 0, f restricted to x_var = 1), aligned on the same bits
        let halves: Vec<(u64, u64)> = if var < VARIABLES_PER_WORD {
            let mask = COFACTOR_MASKS[var];
            let distance = 1 << var;
            blocks
                .iter()
                .map(|word| (word & !mask, (word & mask) >> distance))
                .collect()
        } else {
            let bit = 1usize << (var - VARIABLES_PER_WORD);
            (0..blocks.len())
                .filter(|block_index| block_index & bit == 0)
                .map(|block_index| (blocks[block_index], blocks[block_index | bit]))
                .collect()
        };
        let positive = halves.iter().all(|(low, high)| low & !high == 0);
        let negative = halves.iter().all(|(low, high)| high & !low == 0);
        match (positive, negative) {
            (true, true) => Unateness::Independent,
            (true, false) => Unateness::Positive,
            (false, true) => Unateness::Negative,
            (false, false) => Unateness::Binate,
        }
    }

    /// Map removing the variables the function does not depend on.
    ///
    /// Supported variables are sent, in their original order and without inversion, to $0 .. k-1$,
    /// and the other ones are dropped. If every variable is supported, the identity is returned.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::{TruthTable, VarMapping};
    ///
    /// let function = TruthTable::positive_literal(4, 2).unwrap();
    /// let map = function.shrink_map();
    /// assert_eq!(map.variables_count2(), 1);
    /// assert_eq!(map.input_map(2), VarMapping::new(0, false));
    /// assert_eq!(function.xform(&map).to_string(), "10");
    /// ```
    pub fn shrink_map(&self) -> VarMap {
        let variables_count = self.variables_count();
        let support = (0..variables_count)
            .filter(|var| self.check_sup(*var))
            .collect::<Vec<_>>();
        trace!(
            "support of a {}-input function: {:?}",
            variables_count,
            support
        );
        if support.len() == variables_count {
            return VarMap::identity(variables_count, false);
        }
        let mut map = VarMap::new(variables_count, support.len());
        for (dst, src) in support.into_iter().enumerate() {
            map.set_input_map(src, dst, false);
        }
        map
    }

    /// Recognizes constant, single literal and simple gate functions.
    ///
    /// Independent variables are ignored. Gates are only recognized with positive inputs.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::{PrimType, TruthTable};
    ///
    /// let nor = TruthTable::from_binary_string("00010001").unwrap(); // ~x0.~x1, x2 unused
    /// assert_eq!(nor.analyze(), PrimType::Nor);
    /// ```
    pub fn analyze(&self) -> PrimType {
        if self.is_invalid() {
            return PrimType::Other;
        }
        let shrunk = self.xform(&self.shrink_map());
        let variables_count = shrunk.variables_count();
        match variables_count {
            0 => {
                return if shrunk.is_zero() {
                    PrimType::C0
                } else {
                    PrimType::C1
                }
            }
            1 => {
                return if shrunk.value_at(1) {
                    PrimType::Buff
                } else {
                    PrimType::Not
                }
            }
            _ => {}
        }
        let all_ones = (1usize << variables_count) - 1;
        let first = shrunk.value_at(0);
        let last = shrunk.value_at(all_ones);
        let has_0 = (1..all_ones).any(|pos| !shrunk.value_at(pos));
        let has_1 = (1..all_ones).any(|pos| shrunk.value_at(pos));
        match (first, last, has_0, has_1) {
            (false, true, false, _) => return PrimType::Or,
            (false, true, _, false) => return PrimType::And,
            (true, false, false, _) => return PrimType::Nand,
            (true, false, _, false) => return PrimType::Nor,
            _ => {}
        }
        let parity = |pos: usize| pos.count_ones() % 2 == 1;
        if (0..=all_ones).all(|pos| shrunk.value_at(pos) == parity(pos)) {
            PrimType::Xor
        } else if (0..=all_ones).all(|pos| shrunk.value_at(pos) != parity(pos)) {
            PrimType::Xnor
        } else {
            PrimType::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Literal, PrimType, TruthTable, Unateness, VarMap, VarMapping};
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn brute_force_sym(function: &TruthTable, i: usize, j: usize, inv: bool) -> bool {
        (0..(1u32 << function.variables_count())).all(|pos| {
            let x_i = (pos >> i) & 1;
            let x_j = (pos >> j) & 1;
            let (new_i, new_j) = if inv { (x_j ^ 1, x_i ^ 1) } else { (x_j, x_i) };
            let swapped = (pos & !(1 << i) & !(1 << j)) | (new_i << i) | (new_j << j);
            function.value(pos) == function.value(swapped)
        })
    }

    fn symmetric_function(variables_count: usize, i: usize, j: usize, inv: bool) -> TruthTable {
        // random function symmetrized over the pair (i, j)
        let mut rng = StdRng::seed_from_u64((variables_count * 400 + i * 20 + j) as u64);
        let base = TruthTable::random(&mut rng, variables_count);
        let mut map = VarMap::identity(variables_count, false);
        map.set_input_map(i, j, inv);
        map.set_input_map(j, i, inv);
        &base & &base.xform(&map)
    }

    #[test]
    fn test_check_sup() {
        let mut rng = StdRng::seed_from_u64(10);
        for variables_count in 0..=9 {
            let function = TruthTable::random(&mut rng, variables_count);
            for var in 0..variables_count {
                let expected = (0..(1u32 << variables_count))
                    .any(|pos| function.value(pos) != function.value(pos ^ (1 << var)));
                assert_eq!(function.check_sup(var), expected);
                assert!(!function.cofactor(var, false).check_sup(var));
                assert!(!function.cofactor(var, true).check_sup(var));
            }
        }
        assert!(!TruthTable::invalid().check_sup(0));
    }

    #[test]
    fn test_check_sup_literals() {
        for variables_count in 1..=9 {
            for var in 0..variables_count {
                let literal = TruthTable::positive_literal(variables_count, var).unwrap();
                for other in 0..variables_count {
                    assert_eq!(literal.check_sup(other), other == var);
                }
            }
        }
    }

    #[test]
    fn test_check_sym_random() {
        let mut rng = StdRng::seed_from_u64(11);
        for variables_count in 2..=9 {
            let function = TruthTable::random(&mut rng, variables_count);
            for (j, i) in (0..variables_count).tuple_combinations() {
                for inv in [false, true] {
                    assert_eq!(
                        function.check_sym(i, j, inv),
                        brute_force_sym(&function, i, j, inv)
                    );
                }
            }
        }
    }

    #[test]
    fn test_check_sym_symmetric() {
        for variables_count in 2..=9 {
            for (j, i) in (0..variables_count).tuple_combinations() {
                for inv in [false, true] {
                    let function = symmetric_function(variables_count, i, j, inv);
                    assert!(brute_force_sym(&function, i, j, inv));
                    assert!(function.check_sym(i, j, inv), "{} {} {}", i, j, inv);
                    assert!(function.check_sym(j, i, inv));
                }
            }
        }
    }

    #[test]
    fn test_check_sym_same_variable() {
        let function = TruthTable::from_binary_string("0110").unwrap();
        assert!(function.check_sym(1, 1, false));
        assert!(!function.check_sym(1, 1, true));
        let function = TruthTable::from_binary_string("1100").unwrap();
        assert!(function.check_sym(0, 0, true));
    }

    #[test]
    fn test_and_scenario() {
        let and = &TruthTable::positive_literal(3, 0).unwrap()
            & &TruthTable::positive_literal(3, 1).unwrap();
        assert_eq!(and.count_one(), 2);
        assert_eq!(and.walsh_0(), 4);
        assert!(and.check_sym(0, 1, false));
        assert!(and.check_sym(1, 0, false));
        assert!(!and.check_sup(2));
        assert!(and.check_sup(0));
    }

    #[test]
    fn test_xor_scenario() {
        let xor = TruthTable::from_binary_string("0110").unwrap();
        assert!(xor.check_sym(0, 1, true));
        assert!(xor.check_sym(0, 1, false));
        assert_eq!(xor.walsh_1(0), 0);
        assert_eq!(xor.walsh_1(1), 0);
    }

    #[test]
    fn test_check_unate() {
        let function = TruthTable::from_cubes(
            8,
            [
                vec![Literal::positive(0), Literal::negative(7)],
                vec![Literal::positive(3), Literal::positive(6)],
                vec![Literal::positive(1), Literal::positive(2)],
                vec![Literal::negative(1), Literal::negative(2)],
            ],
        )
        .unwrap();
        assert_eq!(function.check_unate(0), Unateness::Positive);
        assert_eq!(function.check_unate(7), Unateness::Negative);
        assert_eq!(function.check_unate(6), Unateness::Positive);
        assert_eq!(function.check_unate(1), Unateness::Binate);
        assert_eq!(function.check_unate(4), Unateness::Independent);
        assert_eq!(TruthTable::invalid().check_unate(0), Unateness::Independent);
    }

    #[test]
    fn test_check_unate_random() {
        let mut rng = StdRng::seed_from_u64(12);
        for variables_count in 1..=8 {
            let function = TruthTable::random(&mut rng, variables_count);
            for var in 0..variables_count {
                let low = function.cofactor(var, true);
                let high = function.cofactor(var, false);
                let positive = !low.check_intersect(&!&high);
                let negative = !high.check_intersect(&!&low);
                let expected = match (positive, negative) {
                    (true, true) => Unateness::Independent,
                    (true, false) => Unateness::Positive,
                    (false, true) => Unateness::Negative,
                    (false, false) => Unateness::Binate,
                };
                assert_eq!(function.check_unate(var), expected);
            }
        }
    }

    #[test]
    fn test_shrink_map() {
        let mut rng = StdRng::seed_from_u64(13);
        for variables_count in 1..=10 {
            let mut function = TruthTable::random(&mut rng, variables_count);
            for var in (0..variables_count).step_by(3) {
                function.cofactor_inplace(var, false);
            }
            let support = (0..variables_count)
                .filter(|var| function.check_sup(*var))
                .collect::<Vec<_>>();
            let map = function.shrink_map();
            let shrunk = function.xform(&map);
            assert_eq!(shrunk.variables_count(), support.len());
            assert!((0..shrunk.variables_count()).all(|var| shrunk.check_sup(var)));
            for (dst, src) in support.iter().enumerate() {
                assert_eq!(map.input_map(*src), VarMapping::new(dst, false));
            }
            for var in (0..variables_count).step_by(3) {
                assert_eq!(map.input_map(var), VarMapping::Invalid);
            }
        }
    }

    #[test]
    fn test_shrink_map_identity() {
        let function = TruthTable::from_binary_string("0110").unwrap();
        assert!(function.shrink_map().is_identity());
        let constant = TruthTable::one(3).unwrap();
        let map = constant.shrink_map();
        assert_eq!(map.variables_count2(), 0);
        assert!(constant.xform(&map).is_one());
    }

    #[test]
    fn test_analyze() {
        let cases = [
            ("00000000", PrimType::C0),
            ("11111111", PrimType::C1),
            ("11110000", PrimType::Buff),
            ("00110011", PrimType::Not),
            ("10000000", PrimType::And),
            ("01111111", PrimType::Nand),
            ("11111110", PrimType::Or),
            ("00000001", PrimType::Nor),
            ("10010110", PrimType::Xor),
            ("01101001", PrimType::Xnor),
            ("11101000", PrimType::Other),
            ("10001000", PrimType::And),
            ("01100110", PrimType::Xor),
            ("00100010", PrimType::Other),
        ];
        for (binary, expected) in cases {
            let function = TruthTable::from_binary_string(binary).unwrap();
            assert_eq!(function.analyze(), expected, "{}", binary);
        }
        assert_eq!(TruthTable::invalid().analyze(), PrimType::Other);

        let and7 = (0..7).fold(TruthTable::one(8).unwrap(), |acc, var| {
            acc & TruthTable::positive_literal(8, var).unwrap()
        });
        assert_eq!(and7.analyze(), PrimType::And);
        assert_eq!((!&and7).analyze(), PrimType::Nand);
    }
}
