use thiserror::Error;

/// Errors returned by the fallible constructors and by deserialization.
#[derive(Error, Debug, PartialEq)]
pub enum TruthTableError {
    /// The requested input count exceeds the supported maximum.
    #[error("Too big variable count, must be <= {0}")]
    TooBigVariableCount(usize),
    /// A variable index is not below the input count.
    #[error("Variable index {var} out of range for a {variables_count}-input function")]
    VariableIndexOutOfRange {
        /// Offending variable index
        var: usize,
        /// Input count of the function
        variables_count: usize,
    },
    /// An explicit value table does not hold exactly $2^n$ entries.
    #[error("Wrong number of truth values: expected {expected}, got {actual}")]
    WrongValuesCount {
        /// Expected length, $2^n$
        expected: usize,
        /// Given length
        actual: usize,
    },
    /// Binary truth table string length is not a power of 2.
    #[error("Binary truth table length must be a power of 2")]
    WrongStringTruthTableLength,
    /// Binary truth table string contains something else than '0' and '1'.
    #[error("Error parsing string binary number")]
    StringBinaryParseError,
    /// Hex truth table string length is not a power of 2.
    #[error("Hex truth table length must be a power of 2")]
    WrongStringHexTruthTableLength,
    /// Hex truth table string is not a hexadecimal number.
    #[error("Error parsing string hex number")]
    StringHexParseError,
    /// The integer truth table has bits set beyond position $2^n - 1$.
    #[error("Truth table is too big for variables count")]
    TooBigTruthTableForVarCount,
    /// A raw word buffer does not have the expected number of blocks.
    #[error("Wrong number of blocks: expected {expected}, got {actual}")]
    WrongBlocksCount {
        /// Expected block count
        expected: usize,
        /// Given block count
        actual: usize,
    },
    /// The serialized input count is neither the invalid sentinel nor in range.
    #[error("Invalid serialized variables count {0}")]
    InvalidSerializedVariablesCount(i64),
    /// A serialized map has an entry pointing out of its range.
    #[error("Invalid serialized variable map")]
    InvalidSerializedMap,
    /// A multi-output function needs at least one output.
    #[error("Output list must not be empty")]
    EmptyOutputList,
    /// The outputs of a multi-output function do not share one input count, or one of them is invalid.
    #[error("All outputs must be valid and have the same variables count")]
    OutputVariablesCountMismatch,
    /// The serialized output count is zero, or too big for the table to fit in memory.
    #[error("Invalid serialized outputs count {0}")]
    InvalidSerializedOutputsCount(u64),
    /// Underlying stream failure.
    #[error("I/O error: {0:?}")]
    Io(std::io::ErrorKind),
}

impl From<std::io::Error> for TruthTableError {
    fn from(error: std::io::Error) -> Self {
        TruthTableError::Io(error.kind())
    }
}

pub(crate) const XOR_DIFFERENT_VAR_COUNT_PANIC_MSG: &str =
    "XOR operator requires both truth tables to have the same number of variables";
pub(crate) const AND_DIFFERENT_VAR_COUNT_PANIC_MSG: &str =
    "AND operator requires both truth tables to have the same number of variables";
pub(crate) const OR_DIFFERENT_VAR_COUNT_PANIC_MSG: &str =
    "OR operator requires both truth tables to have the same number of variables";
pub(crate) const DIFFERENT_SHAPE_PANIC_MSG: &str =
    "Binary operator requires both multi-output truth tables to have the same shape";
pub(crate) const VARIABLE_OUT_OF_RANGE_PANIC_MSG: &str = "Variable index must be less than";
pub(crate) const OUTPUT_OUT_OF_RANGE_PANIC_MSG: &str = "Output index must be less than";
