//! # Truth table engine for NPN analysis of Boolean functions

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code, unused_must_use)]
#![forbid(
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_extern_crates
)]

mod iterator;
mod literal;
mod masks;
mod multi_truth_table;
mod multi_var_map;
mod structure;
mod truth_table;
mod truth_table_error;
mod utils;
mod var_map;
mod walsh;

pub use crate::iterator::TruthTableIterator;
pub use crate::literal::Literal;
pub use crate::multi_truth_table::MultiTruthTable;
pub use crate::multi_var_map::MultiVarMap;
pub use crate::structure::{PrimType, Unateness};
pub use crate::truth_table::TruthTable;
pub use crate::truth_table_error::TruthTableError;
pub use crate::utils::{MAX_VARIABLES_COUNT, VARIABLES_PER_WORD};
pub use crate::var_map::{VarMap, VarMapping};
