//! Walsh spectrum of truth tables.
//!
//! The Walsh coefficients are those of the $\pm 1$ encoding $(-1)^{f(x)}$ of the function:
//! - order 0: $W_0 = \sum_x (-1)^{f(x)}$
//! - order 1: $W_1(i) = \sum_x (-1)^{f(x) \oplus x_i}$
//! - order 2: $W_2(i, j) = \sum_x (-1)^{f(x) \oplus x_i \oplus x_j}$

use crate::masks::{COFACTOR_MASKS, WEIGHT_MASKS};
use crate::utils::{
    check_variable_index, flip_word_variables, literal_pattern, word_mask, VARIABLES_PER_WORD,
};
use crate::TruthTable;

impl TruthTable {
    /// Sums the popcounts of `pattern(block_index, word)`, restricted to meaningful bits.
    fn count_ones_with(&self, pattern: impl Fn(usize, u64) -> u64) -> i32 {
        let mask = word_mask(self.variables_count());
        self.blocks()
            .iter()
            .enumerate()
            .map(|(block_index, word)| (pattern(block_index, *word) & mask).count_ones() as i32)
            .sum()
    }

    /// Order 0 Walsh coefficient: number of zeros minus number of ones.
    ///
    /// 0 for the invalid table.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let function = TruthTable::from_binary_string("10001000").unwrap();
    /// assert_eq!(function.walsh_0(), 4);
    /// ```
    pub fn walsh_0(&self) -> i32 {
        if self.is_invalid() {
            return 0;
        }
        (1 << self.variables_count()) - 2 * self.count_one() as i32
    }

    /// Order 1 Walsh coefficient of variable `var`: Walsh-0 of $f \oplus x_{var}$.
    ///
    /// 0 for the invalid table.
    ///
    /// # Panics
    /// If `var >= variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn walsh_1(&self, var: usize) -> i32 {
        if self.is_invalid() {
            return 0;
        }
        check_variable_index(var, self.variables_count());
        let ones = self.count_ones_with(|block_index, word| word ^ literal_pattern(var, block_index));
        (1 << self.variables_count()) - 2 * ones
    }

    /// Order 2 Walsh coefficient of variables `var1` and `var2`: Walsh-0 of $f \oplus x_{var1} \oplus x_{var2}$.
    ///
    /// 0 if `var1 == var2`, or for the invalid table.
    ///
    /// # Panics
    /// If a variable index is not less than `variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn walsh_2(&self, var1: usize, var2: usize) -> i32 {
        if self.is_invalid() {
            return 0;
        }
        check_variable_index(var1, self.variables_count());
        check_variable_index(var2, self.variables_count());
        if var1 == var2 {
            return 0;
        }
        let (i, j) = if var1 > var2 {
            (var1, var2)
        } else {
            (var2, var1)
        };
        let ones = if i < VARIABLES_PER_WORD {
            let pattern = COFACTOR_MASKS[i] ^ COFACTOR_MASKS[j];
            self.count_ones_with(|_, word| word ^ pattern)
        } else if j < VARIABLES_PER_WORD {
            let pattern = COFACTOR_MASKS[j];
            self.count_ones_with(|block_index, word| {
                word ^ pattern ^ literal_pattern(i, block_index)
            })
        } else {
            self.count_ones_with(|block_index, word| {
                word ^ literal_pattern(i, block_index) ^ literal_pattern(j, block_index)
            })
        };
        (1 << self.variables_count()) - 2 * ones
    }

    /// Order 0 and every order 1 Walsh coefficients, `walsh_1(i)` being at index `i`.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let function = TruthTable::from_binary_string("10001000").unwrap();
    /// assert_eq!(function.walsh_01(), (4, vec![4, 4, 0]));
    /// ```
    pub fn walsh_01(&self) -> (i32, Vec<i32>) {
        if self.is_invalid() {
            return (0, Vec::new());
        }
        walsh_01_rec(self.blocks(), self.variables_count())
    }

    /// Order 0, 1 and 2 Walsh coefficients.
    ///
    /// The order 2 coefficients form a symmetric matrix, `walsh_2(i, j)` being at `[i][j]`, with a zero diagonal.
    pub fn walsh_012(&self) -> (i32, Vec<i32>, Vec<Vec<i32>>) {
        if self.is_invalid() {
            return (0, Vec::new(), Vec::new());
        }
        walsh_012_rec(self.blocks(), self.variables_count())
    }

    /// Order 0 Walsh coefficient restricted to a Hamming weight shell.
    ///
    /// Computes $\sum_{|q| = weight} (-1)^{f(q \oplus ibits)}$, negated if `oinv` is `true`.
    /// Summing over every weight from 0 to $n$ gives [TruthTable::walsh_0] (with `oinv == false`).
    ///
    /// 0 if `weight > variables_count()`, or for the invalid table.
    ///
    /// # Panics
    /// If `ibits` is greater than $2^n - 1$, and the `unsafe_disable_safety_checks` feature is not enabled.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let function = TruthTable::from_binary_string("10001000").unwrap();
    /// assert_eq!(function.walsh_w0(2, false, 0), 1);
    /// assert_eq!(function.walsh_w0(2, false, 0b011), 3);
    /// assert_eq!(function.walsh_w0(0, false, 0b011), -1);
    /// ```
    pub fn walsh_w0(&self, weight: usize, oinv: bool, ibits: usize) -> i32 {
        self.weighted_walsh(None, weight, oinv, ibits)
    }

    /// Order 1 Walsh coefficient of variable `var` restricted to a Hamming weight shell.
    ///
    /// Computes $\sum_{|q| = weight} (-1)^{f(q \oplus ibits) \oplus q_{var}}$, negated if `oinv` is `true`.
    ///
    /// 0 if `weight > variables_count()`, or for the invalid table.
    ///
    /// # Panics
    /// If `var >= variables_count()` or `ibits` is greater than $2^n - 1$, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn walsh_w1(&self, var: usize, weight: usize, oinv: bool, ibits: usize) -> i32 {
        if self.is_valid() {
            check_variable_index(var, self.variables_count());
        }
        self.weighted_walsh(Some(var), weight, oinv, ibits)
    }

    fn weighted_walsh(&self, var: Option<usize>, weight: usize, oinv: bool, ibits: usize) -> i32 {
        let variables_count = self.variables_count();
        if self.is_invalid() || weight > variables_count {
            return 0;
        }
        #[cfg(not(feature = "unsafe_disable_safety_checks"))]
        {
            if ibits >> variables_count != 0 {
                panic!(
                    "Input polarity bits must be less or equal than {}",
                    self.get_max_input_value()
                );
            }
        }
        let blocks = self.blocks();
        let mask = word_mask(variables_count);
        let word_flips = ibits & ((1 << VARIABLES_PER_WORD) - 1);
        let block_flips = ibits >> VARIABLES_PER_WORD;
        let mut ones = 0;
        for block_index in 0..blocks.len() {
            let block_weight = block_index.count_ones() as usize;
            if block_weight > weight || weight - block_weight > VARIABLES_PER_WORD {
                continue;
            }
            let mut word = flip_word_variables(blocks[block_index ^ block_flips], word_flips);
            if let Some(var) = var {
                word ^= literal_pattern(var, block_index);
            }
            ones += (word & WEIGHT_MASKS[weight - block_weight] & mask).count_ones() as i32;
        }
        let shell_size = num_integer::binomial(variables_count, weight) as i32;
        let value = shell_size - 2 * ones;
        if oinv {
            -value
        } else {
            value
        }
    }
}

/// Walsh-0 and Walsh-1 of the `variables_count`-input function stored in `blocks`.
///
/// Above one word, the function is split on its top variable into two halves, whose spectra add up,
/// except for the top variable whose coefficient is the difference of the halves' Walsh-0.
fn walsh_01_rec(blocks: &[u64], variables_count: usize) -> (i32, Vec<i32>) {
    if variables_count <= VARIABLES_PER_WORD {
        let word = blocks[0];
        let mask = word_mask(variables_count);
        let walsh = |pattern: u64| {
            (1 << variables_count) - 2 * ((word ^ pattern) & mask).count_ones() as i32
        };
        let walsh_1 = COFACTOR_MASKS[..variables_count]
            .iter()
            .map(|pattern| walsh(*pattern))
            .collect();
        return (walsh(0), walsh_1);
    }
    let (low, high) = blocks.split_at(blocks.len() / 2);
    let (low_0, mut walsh_1) = walsh_01_rec(low, variables_count - 1);
    let (high_0, high_1) = walsh_01_rec(high, variables_count - 1);
    for (coefficient, high_coefficient) in walsh_1.iter_mut().zip(high_1) {
        *coefficient += high_coefficient;
    }
    walsh_1.push(low_0 - high_0);
    (low_0 + high_0, walsh_1)
}

/// Walsh-0, Walsh-1 and Walsh-2 of the `variables_count`-input function stored in `blocks`, split like [walsh_01_rec].
fn walsh_012_rec(blocks: &[u64], variables_count: usize) -> (i32, Vec<i32>, Vec<Vec<i32>>) {
    if variables_count <= VARIABLES_PER_WORD {
        let word = blocks[0];
        let mask = word_mask(variables_count);
        let walsh = |pattern: u64| {
            (1 << variables_count) - 2 * ((word ^ pattern) & mask).count_ones() as i32
        };
        let walsh_1 = (0..variables_count)
            .map(|i| walsh(COFACTOR_MASKS[i]))
            .collect();
        let walsh_2 = (0..variables_count)
            .map(|i| {
                (0..variables_count)
                    .map(|j| {
                        if i == j {
                            0
                        } else {
                            walsh(COFACTOR_MASKS[i] ^ COFACTOR_MASKS[j])
                        }
                    })
                    .collect()
            })
            .collect();
        return (walsh(0), walsh_1, walsh_2);
    }
    let top = variables_count - 1;
    let (low, high) = blocks.split_at(blocks.len() / 2);
    let (low_0, low_1, low_2) = walsh_012_rec(low, top);
    let (high_0, high_1, high_2) = walsh_012_rec(high, top);
    let mut walsh_2 = vec![vec![0; variables_count]; variables_count];
    for i in 0..top {
        for j in 0..top {
            walsh_2[i][j] = low_2[i][j] + high_2[i][j];
        }
        walsh_2[i][top] = low_1[i] - high_1[i];
        walsh_2[top][i] = walsh_2[i][top];
    }
    let mut walsh_1 = low_1
        .iter()
        .zip(&high_1)
        .map(|(low_coefficient, high_coefficient)| low_coefficient + high_coefficient)
        .collect::<Vec<_>>();
    walsh_1.push(low_0 - high_0);
    (low_0 + high_0, walsh_1, walsh_2)
}
