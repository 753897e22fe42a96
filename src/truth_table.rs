use crate::iterator::TruthTableIterator;
use crate::literal::Literal;
use crate::masks::COFACTOR_MASKS;
use crate::truth_table_error::{
    TruthTableError, AND_DIFFERENT_VAR_COUNT_PANIC_MSG, OR_DIFFERENT_VAR_COUNT_PANIC_MSG,
    XOR_DIFFERENT_VAR_COUNT_PANIC_MSG,
};
use crate::utils::{
    block, block_count, check_variable_index, read_i64, read_u64, shift, word_mask, write_i64,
    write_u64, literal_pattern, MAX_VARIABLES_COUNT, VARIABLES_PER_WORD,
};
use crate::var_map::{VarMap, VarMapping};
use hackfn::hackfn;
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Num;
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::io::{Read, Write};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Not,
};

/// Packed truth table of a single-output Boolean function of up to [MAX_VARIABLES_COUNT] variables.
///
/// The truth value of input assignment $p$ (variable $i$ being bit $i$ of $p$) is bit `p % 64` of word `p / 64`.
/// Bits of the last word beyond position $2^n - 1$ are always zero.
///
/// A table can also be *invalid*, meaning "no function". This is the [Default] value, and the result of
/// [TruthTable::xform] with an ill-formed map. Operations on an invalid table give an invalid table.
///
/// # Example
/// ```rust
/// use npn_truth_table::TruthTable;
///
/// let x0 = TruthTable::positive_literal(3, 0).unwrap();
/// let x1 = TruthTable::positive_literal(3, 1).unwrap();
/// let and = &x0 & &x1;
/// assert_eq!(and.to_string(), "10001000");
/// assert_eq!(and.count_one(), 2);
/// assert!(and(3));
/// assert!(!and(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruthTable {
    variables_count: usize,
    truth_table: Vec<u64>,
}

impl TruthTable {
    fn filled(variables_count: usize, word: u64) -> Result<Self, TruthTableError> {
        if variables_count > MAX_VARIABLES_COUNT {
            return Err(TruthTableError::TooBigVariableCount(MAX_VARIABLES_COUNT));
        }
        Ok(TruthTable {
            variables_count,
            truth_table: vec![word & word_mask(variables_count); block_count(variables_count)],
        })
    }

    pub(crate) fn from_blocks_unchecked(variables_count: usize, truth_table: Vec<u64>) -> Self {
        TruthTable {
            variables_count,
            truth_table,
        }
    }

    /// The invalid truth table, representing no function.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Constant 0 function of `variables_count` variables.
    ///
    /// # Returns
    /// The function, or [TruthTableError::TooBigVariableCount] if `variables_count` exceeds [MAX_VARIABLES_COUNT].
    pub fn zero(variables_count: usize) -> Result<Self, TruthTableError> {
        Self::filled(variables_count, 0)
    }

    /// Constant 1 function of `variables_count` variables.
    ///
    /// # Returns
    /// The function, or [TruthTableError::TooBigVariableCount] if `variables_count` exceeds [MAX_VARIABLES_COUNT].
    pub fn one(variables_count: usize) -> Result<Self, TruthTableError> {
        Self::filled(variables_count, u64::MAX)
    }

    /// Single literal function $x_{var}$, or $\overline{x_{var}}$ if `inv` is `true`.
    ///
    /// # Returns
    /// The function, or an error if `variables_count` is too big or `var >= variables_count`.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let literal = TruthTable::literal(3, 1, true).unwrap();
    /// assert_eq!(literal.to_string(), "00110011");
    /// ```
    pub fn literal(variables_count: usize, var: usize, inv: bool) -> Result<Self, TruthTableError> {
        if variables_count > MAX_VARIABLES_COUNT {
            return Err(TruthTableError::TooBigVariableCount(MAX_VARIABLES_COUNT));
        }
        if var >= variables_count {
            return Err(TruthTableError::VariableIndexOutOfRange {
                var,
                variables_count,
            });
        }
        let mask = word_mask(variables_count);
        let truth_table = (0..block_count(variables_count))
            .map(|block_index| {
                let pattern = literal_pattern(var, block_index);
                (if inv { !pattern } else { pattern }) & mask
            })
            .collect();
        Ok(TruthTable {
            variables_count,
            truth_table,
        })
    }

    /// Positive literal function $x_{var}$.
    pub fn positive_literal(variables_count: usize, var: usize) -> Result<Self, TruthTableError> {
        Self::literal(variables_count, var, false)
    }

    /// Negative literal function $\overline{x_{var}}$.
    pub fn negative_literal(variables_count: usize, var: usize) -> Result<Self, TruthTableError> {
        Self::literal(variables_count, var, true)
    }

    /// Single literal function from a [Literal].
    pub fn from_literal(variables_count: usize, literal: Literal) -> Result<Self, TruthTableError> {
        Self::literal(variables_count, literal.var(), literal.is_negative())
    }

    /// Sum of products: OR over `cubes` of the AND of each cube's literals.
    ///
    /// An empty cube is the constant 1, an empty cube list gives the constant 0.
    ///
    /// # Returns
    /// The function, or an error if `variables_count` is too big or a literal variable is out of range.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::{Literal, TruthTable};
    ///
    /// // x0.x1 + ~x2
    /// let function = TruthTable::from_cubes(
    ///     3,
    ///     [
    ///         vec![Literal::positive(0), Literal::positive(1)],
    ///         vec![Literal::negative(2)],
    ///     ],
    /// )
    /// .unwrap();
    /// assert_eq!(function.to_string(), "10001111");
    /// ```
    pub fn from_cubes<I, C>(variables_count: usize, cubes: I) -> Result<Self, TruthTableError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[Literal]>,
    {
        let mut function = Self::zero(variables_count)?;
        for cube in cubes {
            let mut product = Self::one(variables_count)?;
            for literal in cube.as_ref() {
                product &= &Self::from_literal(variables_count, *literal)?;
            }
            function |= &product;
        }
        Ok(function)
    }

    /// Function whose truth value on assignment `p` is `values[p]`.
    ///
    /// # Returns
    /// The function, or [TruthTableError::WrongValuesCount] if `values` does not hold exactly $2^n$ entries.
    pub fn from_values(variables_count: usize, values: &[bool]) -> Result<Self, TruthTableError> {
        let mut function = Self::zero(variables_count)?;
        let expected = 1 << variables_count;
        if values.len() != expected {
            return Err(TruthTableError::WrongValuesCount {
                expected,
                actual: values.len(),
            });
        }
        for (pos, _) in values.iter().enumerate().filter(|(_, value)| **value) {
            function.truth_table[block(pos)] |= 1 << shift(pos);
        }
        Ok(function)
    }

    /// Function from a string of '0' and '1', the value of the highest assignment first.
    ///
    /// # Returns
    /// The function, or an error if the string length is not a power of 2, or the string contains other characters.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let xor = TruthTable::from_binary_string("0110").unwrap();
    /// assert_eq!(xor.variables_count(), 2);
    /// assert!(xor.value(1));
    /// assert!(!xor.value(3));
    /// ```
    pub fn from_binary_string(binary_truth_table: &str) -> Result<Self, TruthTableError> {
        let length = binary_truth_table.len();
        if length.count_ones() != 1 {
            return Err(TruthTableError::WrongStringTruthTableLength);
        }
        let variables_count = length.trailing_zeros() as usize;
        let mut function = Self::zero(variables_count)?;
        for (index, character) in binary_truth_table.chars().enumerate() {
            let pos = length - 1 - index;
            match character {
                '0' => {}
                '1' => function.truth_table[block(pos)] |= 1 << shift(pos),
                _ => return Err(TruthTableError::StringBinaryParseError),
            }
        }
        Ok(function)
    }

    /// Function from a hexadecimal string of $\frac{2^n}{4}$ digits, most significant first.
    ///
    /// Only accepts functions of 2 or more variables.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let function = TruthTable::from_hex_string_truth_table("e8").unwrap();
    /// assert_eq!(function.variables_count(), 3);
    /// assert_eq!(function.printable_hex_truth_table(), "e8");
    /// ```
    pub fn from_hex_string_truth_table(hex_truth_table: &str) -> Result<Self, TruthTableError> {
        if hex_truth_table.len().count_ones() != 1 {
            return Err(TruthTableError::WrongStringHexTruthTableLength);
        }
        if !hex_truth_table.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TruthTableError::StringHexParseError);
        }
        let variables_count = (hex_truth_table.len() << 2).trailing_zeros() as usize;
        let truth_table = BigUint::from_str_radix(hex_truth_table, 16)
            .map_err(|_| TruthTableError::StringHexParseError)?;
        Self::from_biguint_truth_table(&truth_table, variables_count)
    }

    /// Function of 6 or fewer variables from a single word.
    ///
    /// # Returns
    /// The function, or an error if `variables_count > 6` or `truth_table` has bits beyond position $2^n - 1$.
    pub fn from_u64_truth_table(truth_table: u64, variables_count: usize) -> Result<Self, TruthTableError> {
        if variables_count > VARIABLES_PER_WORD {
            return Err(TruthTableError::TooBigVariableCount(VARIABLES_PER_WORD));
        }
        Self::from_raw_blocks(variables_count, vec![truth_table])
    }

    /// Function from an arbitrary-precision integer truth table, bit $p$ being the value of assignment $p$.
    pub fn from_biguint_truth_table(
        truth_table: &BigUint,
        variables_count: usize,
    ) -> Result<Self, TruthTableError> {
        if variables_count > MAX_VARIABLES_COUNT {
            return Err(TruthTableError::TooBigVariableCount(MAX_VARIABLES_COUNT));
        }
        if truth_table.bits() > 1 << variables_count {
            return Err(TruthTableError::TooBigTruthTableForVarCount);
        }
        let mut blocks = truth_table.to_u64_digits();
        blocks.resize(block_count(variables_count), 0);
        Ok(TruthTable {
            variables_count,
            truth_table: blocks,
        })
    }

    /// Function from its packed words, as returned by [TruthTable::blocks].
    ///
    /// # Returns
    /// The function, or an error if the word count does not match, or if bits beyond position $2^n - 1$ are set.
    pub fn from_raw_blocks(variables_count: usize, blocks: Vec<u64>) -> Result<Self, TruthTableError> {
        if variables_count > MAX_VARIABLES_COUNT {
            return Err(TruthTableError::TooBigVariableCount(MAX_VARIABLES_COUNT));
        }
        let expected = block_count(variables_count);
        if blocks.len() != expected {
            return Err(TruthTableError::WrongBlocksCount {
                expected,
                actual: blocks.len(),
            });
        }
        let mask = word_mask(variables_count);
        if blocks.iter().any(|word| word & !mask != 0) {
            return Err(TruthTableError::TooBigTruthTableForVarCount);
        }
        Ok(TruthTable {
            variables_count,
            truth_table: blocks,
        })
    }

    /// Truth table as an arbitrary-precision integer, bit $p$ being the value of assignment $p$.
    pub fn biguint_truth_table(&self) -> BigUint {
        BigUint::new(
            self.truth_table
                .iter()
                .flat_map(|word| [*word as u32, (word >> 32) as u32])
                .collect(),
        )
    }

    /// Number of input variables, 0 for the invalid table.
    #[inline]
    pub fn variables_count(&self) -> usize {
        self.variables_count
    }

    /// Number of 64-bit words of the truth table, 0 for the invalid table.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.truth_table.len()
    }

    /// `true` unless this is the invalid table.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.truth_table.is_empty()
    }

    /// `true` for the invalid table.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.truth_table.is_empty()
    }

    /// Maximum input value, $2^n - 1$.
    #[inline]
    pub fn get_max_input_value(&self) -> u32 {
        (1 << self.variables_count) - 1
    }

    /// Packed words of the truth table.
    #[inline]
    pub fn blocks(&self) -> &[u64] {
        &self.truth_table
    }

    /// Word `block_index` of the truth table.
    ///
    /// # Panics
    /// If `block_index >= block_count()`.
    #[inline]
    pub fn raw_block(&self, block_index: usize) -> u64 {
        self.truth_table[block_index]
    }

    /// Truth value of the input assignment `input_bits`, `false` for the invalid table.
    ///
    /// # Panics
    /// If `input_bits` is greater than $2^n - 1$, and the `unsafe_disable_safety_checks` feature is not enabled.
    #[inline]
    pub fn value(&self, input_bits: u32) -> bool {
        #[cfg(not(feature = "unsafe_disable_safety_checks"))]
        {
            let max_input_value = self.get_max_input_value();
            if input_bits > max_input_value {
                panic!("Input bits must be less or equal than {}", max_input_value);
            }
        }
        self.value_at(input_bits as usize)
    }

    #[inline]
    pub(crate) fn value_at(&self, pos: usize) -> bool {
        self.truth_table
            .get(block(pos))
            .map_or(false, |word| (word >> shift(pos)) & 1 != 0)
    }

    /// Iterator over the truth values, from assignment 0 to $2^n - 1$.
    pub fn iter(&self) -> TruthTableIterator<'_> {
        TruthTableIterator::new(self)
    }

    /// `true` if the function is the constant 0.
    pub fn is_zero(&self) -> bool {
        self.is_valid() && self.truth_table.iter().all(|word| *word == 0)
    }

    /// `true` if the function is the constant 1.
    pub fn is_one(&self) -> bool {
        let mask = word_mask(self.variables_count);
        self.is_valid() && self.truth_table.iter().all(|word| *word == mask)
    }

    /// Number of input assignments where the function is 1.
    pub fn count_one(&self) -> usize {
        self.truth_table
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Number of input assignments where the function is 0, 0 for the invalid table.
    pub fn count_zero(&self) -> usize {
        if self.is_invalid() {
            return 0;
        }
        (1 << self.variables_count) - self.count_one()
    }

    /// Complements the function in place.
    pub fn invert_inplace(&mut self) -> &mut Self {
        let mask = word_mask(self.variables_count);
        for word in &mut self.truth_table {
            *word = !*word & mask;
        }
        self
    }

    /// Complemented function.
    pub fn invert(&self) -> Self {
        let mut inverted = self.clone();
        inverted.invert_inplace();
        inverted
    }

    fn combine_inplace(
        &mut self,
        rhs: &Self,
        panic_msg: &str,
        operator: impl Fn(u64, u64) -> u64,
    ) -> &mut Self {
        if self.is_invalid() || rhs.is_invalid() {
            *self = Self::invalid();
            return self;
        }
        if self.variables_count != rhs.variables_count {
            panic!("{}", panic_msg);
        }
        for (word, rhs_word) in self.truth_table.iter_mut().zip(&rhs.truth_table) {
            *word = operator(*word, *rhs_word);
        }
        self
    }

    /// In-place AND.
    ///
    /// # Panics
    /// If both functions are valid and have different number of variables.
    pub fn and_inplace(&mut self, rhs: &Self) -> &mut Self {
        self.combine_inplace(rhs, AND_DIFFERENT_VAR_COUNT_PANIC_MSG, |a, b| a & b)
    }

    /// In-place OR.
    ///
    /// # Panics
    /// If both functions are valid and have different number of variables.
    pub fn or_inplace(&mut self, rhs: &Self) -> &mut Self {
        self.combine_inplace(rhs, OR_DIFFERENT_VAR_COUNT_PANIC_MSG, |a, b| a | b)
    }

    /// In-place XOR.
    ///
    /// # Panics
    /// If both functions are valid and have different number of variables.
    pub fn xor_inplace(&mut self, rhs: &Self) -> &mut Self {
        self.combine_inplace(rhs, XOR_DIFFERENT_VAR_COUNT_PANIC_MSG, |a, b| a ^ b)
    }

    /// `true` if `self & rhs` is not the constant 0.
    ///
    /// # Panics
    /// If both functions are valid and have different number of variables.
    pub fn check_intersect(&self, rhs: &Self) -> bool {
        if self.is_invalid() || rhs.is_invalid() {
            return false;
        }
        if self.variables_count != rhs.variables_count {
            panic!("{}", AND_DIFFERENT_VAR_COUNT_PANIC_MSG);
        }
        self.truth_table
            .iter()
            .zip(&rhs.truth_table)
            .any(|(a, b)| a & b != 0)
    }

    /// Replaces the function by its cofactor on `var`, in place.
    ///
    /// With `inv == false` the function is restricted to $x_{var} = 1$, with `inv == true` to $x_{var} = 0$.
    /// The restricted half is copied over the other half, so the variable count is unchanged and
    /// the result no longer depends on `var`.
    ///
    /// # Panics
    /// If `var >= variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn cofactor_inplace(&mut self, var: usize, inv: bool) -> &mut Self {
        if self.is_invalid() {
            return self;
        }
        check_variable_index(var, self.variables_count);
        if var < VARIABLES_PER_WORD {
            let distance = 1 << var;
            let mask = COFACTOR_MASKS[var];
            for word in &mut self.truth_table {
                *word = if inv {
                    let pattern = *word & !mask;
                    pattern | (pattern << distance)
                } else {
                    let pattern = *word & mask;
                    pattern | (pattern >> distance)
                };
            }
        } else {
            let bit = 1usize << (var - VARIABLES_PER_WORD);
            for block_index in 0..self.truth_table.len() {
                if (block_index & bit != 0) == inv {
                    self.truth_table[block_index] = self.truth_table[block_index ^ bit];
                }
            }
        }
        self
    }

    /// Cofactor on `var`, see [TruthTable::cofactor_inplace].
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let function = TruthTable::from_binary_string("11101000").unwrap();
    /// assert_eq!(function.cofactor(2, false).to_string(), "11101110");
    /// assert_eq!(function.cofactor(2, true).to_string(), "10001000");
    /// ```
    pub fn cofactor(&self, var: usize, inv: bool) -> Self {
        let mut cofactor = self.clone();
        cofactor.cofactor_inplace(var, inv);
        cofactor
    }

    /// Applies a variable transform.
    ///
    /// If `map` sends input `src` to `(dst, inv)`, the result $g$ has `map.variables_count2()` variables and
    /// $g(y) = f(x) \oplus o$, where $x_{src} = y_{dst} \oplus inv$ and $o$ is `map.output_inv()`.
    /// Inputs dropped by the map read as 0.
    ///
    /// # Returns
    /// The transformed function. The invalid table is returned if `self` is invalid, if `map` does not start from
    /// `variables_count()` variables, or if one of its targets is out of range.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::{TruthTable, VarMap};
    ///
    /// let function = TruthTable::from_binary_string("0010").unwrap(); // x0.~x1
    /// let mut map = VarMap::new(2, 2);
    /// map.set_input_map(0, 1, false);
    /// map.set_input_map(1, 0, true);
    /// assert_eq!(function.xform(&map).to_string(), "1000"); // x0.x1
    /// ```
    pub fn xform(&self, map: &VarMap) -> Self {
        trace!("xform of a {}-input function by {}", self.variables_count, map);
        if self.is_invalid() {
            return Self::invalid();
        }
        if !map.is_well_formed_for(self.variables_count) {
            debug!(
                "ill-formed map for a {}-input function: {}",
                self.variables_count, map
            );
            return Self::invalid();
        }
        let variables_count2 = map.variables_count2();
        // sources[dst]: mask of the original inputs driven by output variable dst
        let mut sources = [0usize; MAX_VARIABLES_COUNT];
        let mut input_flips = 0usize;
        for (src, mapping) in map.input_mappings().enumerate() {
            if let VarMapping::Var { var: dst, inv } = *mapping {
                sources[dst] |= 1 << src;
                if inv {
                    input_flips |= 1 << src;
                }
            }
        }
        let mut transformed = TruthTable {
            variables_count: variables_count2,
            truth_table: vec![0; block_count(variables_count2)],
        };
        for pos in 0..(1usize << variables_count2) {
            let original_pos = sources[..variables_count2]
                .iter()
                .enumerate()
                .filter(|(dst, _)| pos & (1 << dst) != 0)
                .fold(0, |acc, (_, source)| acc | source);
            if self.value_at(original_pos ^ input_flips) ^ map.output_inv() {
                transformed.truth_table[block(pos)] |= 1 << shift(pos);
            }
        }
        transformed
    }

    /// Hash value folding the 32-bit halves of every word, plus the variable count.
    pub fn hash_value(&self) -> u64 {
        self.truth_table
            .iter()
            .fold(0u64, |acc, word| acc ^ (word & 0xffffffff) ^ (word >> 32))
            .wrapping_add(self.variables_count as u64)
    }

    /// Truth table as a binary string, the value of the highest assignment first. Empty for the invalid table.
    pub fn printable_binary_truth_table(&self) -> String {
        if self.is_invalid() {
            return String::new();
        }
        (0..(1usize << self.variables_count))
            .rev()
            .map(|pos| if self.value_at(pos) { '1' } else { '0' })
            .collect()
    }

    /// Truth table as a hexadecimal string, most significant digit first. Empty for the invalid table.
    ///
    /// Functions of 0 and 1 variable are printed as a single digit, respectively `0`-`1` and `0`-`3`.
    pub fn printable_hex_truth_table(&self) -> String {
        if self.is_invalid() {
            return String::new();
        }
        if self.variables_count < 2 {
            return format!("{:x}", self.truth_table[0]);
        }
        (0..(1usize << (self.variables_count - 2)))
            .rev()
            .map(|nibble| {
                let pos = nibble << 2;
                format!("{:x}", (self.truth_table[block(pos)] >> shift(pos)) & 0xf)
            })
            .collect()
    }

    /// Writes the variable count as a signed 64-bit integer (-1 for the invalid table), then every word.
    ///
    /// # Example
    /// ```rust
    /// use npn_truth_table::TruthTable;
    ///
    /// let function = TruthTable::from_binary_string("0110").unwrap();
    /// let mut buffer = Vec::new();
    /// function.dump(&mut buffer).unwrap();
    /// assert_eq!(buffer.len(), 16);
    /// assert_eq!(TruthTable::restore(&mut buffer.as_slice()).unwrap(), function);
    /// ```
    pub fn dump<W: Write>(&self, writer: &mut W) -> Result<(), TruthTableError> {
        let variables_count = if self.is_invalid() {
            -1
        } else {
            self.variables_count as i64
        };
        write_i64(writer, variables_count)?;
        for word in &self.truth_table {
            write_u64(writer, *word)?;
        }
        Ok(())
    }

    /// Reads a truth table written by [TruthTable::dump].
    pub fn restore<R: Read>(reader: &mut R) -> Result<Self, TruthTableError> {
        let variables_count = read_i64(reader)?;
        if variables_count == -1 {
            return Ok(Self::invalid());
        }
        if !(0..=MAX_VARIABLES_COUNT as i64).contains(&variables_count) {
            return Err(TruthTableError::InvalidSerializedVariablesCount(
                variables_count,
            ));
        }
        let variables_count = variables_count as usize;
        let blocks = (0..block_count(variables_count))
            .map(|_| read_u64(reader))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_raw_blocks(variables_count, blocks)
    }
}

impl Ord for TruthTable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.is_valid()
            .cmp(&other.is_valid())
            .then(self.variables_count.cmp(&other.variables_count))
            .then_with(|| {
                self.truth_table
                    .iter()
                    .rev()
                    .cmp(other.truth_table.iter().rev())
            })
    }
}

impl PartialOrd for TruthTable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for TruthTable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

/// Binary string rendering, see [TruthTable::printable_binary_truth_table].
impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.printable_binary_truth_table())
    }
}

/// Create a truth table from its binary string representation, see [TruthTable::from_binary_string].
impl TryFrom<&str> for TruthTable {
    type Error = TruthTableError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_binary_string(value)
    }
}

macro_rules! impl_bitwise_operator {
    ($doc:literal, $op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $inplace:ident) => {
        #[doc = $doc]
        ///
        /// # Panics
        /// If both functions are valid and have different number of variables.
        impl $assign_trait<&TruthTable> for TruthTable {
            fn $assign_fn(&mut self, rhs: &TruthTable) {
                self.$inplace(rhs);
            }
        }

        #[doc = $doc]
        ///
        /// # Panics
        /// If both functions are valid and have different number of variables.
        impl $assign_trait for TruthTable {
            fn $assign_fn(&mut self, rhs: TruthTable) {
                self.$inplace(&rhs);
            }
        }

        #[doc = $doc]
        ///
        /// # Panics
        /// If both functions are valid and have different number of variables.
        impl $op_trait<&TruthTable> for &TruthTable {
            type Output = TruthTable;

            fn $op_fn(self, rhs: &TruthTable) -> TruthTable {
                let mut result = self.clone();
                result.$inplace(rhs);
                result
            }
        }

        #[doc = $doc]
        ///
        /// # Panics
        /// If both functions are valid and have different number of variables.
        impl $op_trait for TruthTable {
            type Output = TruthTable;

            fn $op_fn(mut self, rhs: TruthTable) -> TruthTable {
                self.$inplace(&rhs);
                self
            }
        }
    };
}

impl_bitwise_operator!("AND operator for truth tables.", BitAnd, bitand, BitAndAssign, bitand_assign, and_inplace);
impl_bitwise_operator!("OR operator for truth tables.", BitOr, bitor, BitOrAssign, bitor_assign, or_inplace);
impl_bitwise_operator!("XOR operator for truth tables.", BitXor, bitxor, BitXorAssign, bitxor_assign, xor_inplace);
impl_bitwise_operator!("ADD operator for truth tables, equivalent to XOR.", Add, add, AddAssign, add_assign, xor_inplace);
impl_bitwise_operator!("MUL operator for truth tables, equivalent to AND.", Mul, mul, MulAssign, mul_assign, and_inplace);

/// NOT operator for truth tables, see [TruthTable::invert].
impl Not for TruthTable {
    type Output = TruthTable;

    fn not(mut self) -> Self::Output {
        self.invert_inplace();
        self
    }
}

/// NOT operator for truth tables, see [TruthTable::invert].
impl Not for &TruthTable {
    type Output = TruthTable;

    fn not(self) -> Self::Output {
        self.invert()
    }
}

#[hackfn]
impl TruthTable {
    fn call(&self, input_bits: u32) -> bool {
        self.value(input_bits)
    }
}

#[cfg(test)]
impl TruthTable {
    pub(crate) fn random<R: rand::Rng>(rng: &mut R, variables_count: usize) -> Self {
        let mask = word_mask(variables_count);
        let blocks = (0..block_count(variables_count))
            .map(|_| rng.gen::<u64>() & mask)
            .collect();
        TruthTable {
            variables_count,
            truth_table: blocks,
        }
    }
}
