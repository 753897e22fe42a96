use crate::truth_table_error::{TruthTableError, OUTPUT_OUT_OF_RANGE_PANIC_MSG};
use crate::utils::{check_variable_index, read_u64, write_u64, MAX_VARIABLES_COUNT};
use crate::var_map::{VarMap, VarMapping};
use itertools::Itertools;
use log::debug;
use std::fmt::Display;
use std::io::{Read, Write};
use std::ops::Mul;

/// Variable transform of a [MultiTruthTable](crate::MultiTruthTable): an input permutation with polarities,
/// and an output permutation with polarities.
///
/// Output `src` of the original function becomes output `dst` of the transformed one, complemented if the
/// output entry says so.
///
/// # Example
/// ```rust
/// use npn_truth_table::{MultiVarMap, VarMapping};
///
/// let mut map = MultiVarMap::identity(3, 2);
/// map.set_output_map(0, 1, true);
/// map.set_output_map(1, 0, false);
/// assert_eq!(map.output_map(0), VarMapping::new(1, true));
/// assert_eq!(
///     map.to_string(),
///     "MAP: 3 -> 3, INPUT(0 ==> 0, 1 ==> 1, 2 ==> 2) OUTPUT(0 ==> ~1, 1 ==> 0)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiVarMap {
    input_map: Vec<VarMapping>,
    output_map: Vec<VarMapping>,
}

impl MultiVarMap {
    /// Map on `variables_count` inputs and `outputs_count` outputs with every entry unmapped.
    pub fn new(variables_count: usize, outputs_count: usize) -> Self {
        MultiVarMap {
            input_map: vec![VarMapping::Invalid; variables_count],
            output_map: vec![VarMapping::Invalid; outputs_count],
        }
    }

    /// Identity map.
    pub fn identity(variables_count: usize, outputs_count: usize) -> Self {
        let identity = |count: usize| (0..count).map(|var| VarMapping::new(var, false)).collect();
        MultiVarMap {
            input_map: identity(variables_count),
            output_map: identity(outputs_count),
        }
    }

    /// Number of inputs.
    #[inline]
    pub fn variables_count(&self) -> usize {
        self.input_map.len()
    }

    /// Number of outputs.
    #[inline]
    pub fn outputs_count(&self) -> usize {
        self.output_map.len()
    }

    /// Mapping of input `var`, [VarMapping::Invalid] if `var` is out of range.
    pub fn input_map(&self, var: usize) -> VarMapping {
        self.input_map
            .get(var)
            .copied()
            .unwrap_or(VarMapping::Invalid)
    }

    /// Mapping of output `output`, [VarMapping::Invalid] if `output` is out of range.
    pub fn output_map(&self, output: usize) -> VarMapping {
        self.output_map
            .get(output)
            .copied()
            .unwrap_or(VarMapping::Invalid)
    }

    /// Sends input `src` to input `dst` with polarity `inv`.
    ///
    /// # Panics
    /// If `src` or `dst` is not less than `variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn set_input_map(&mut self, src: usize, dst: usize, inv: bool) {
        check_variable_index(src, self.variables_count());
        check_variable_index(dst, self.variables_count());
        self.input_map[src] = VarMapping::new(dst, inv);
    }

    /// Drops input `src`.
    ///
    /// # Panics
    /// If `src >= variables_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn set_input_invalid(&mut self, src: usize) {
        check_variable_index(src, self.variables_count());
        self.input_map[src] = VarMapping::Invalid;
    }

    /// Sends output `src` to output `dst`, complemented if `inv` is `true`.
    ///
    /// # Panics
    /// If `src` or `dst` is not less than `outputs_count()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn set_output_map(&mut self, src: usize, dst: usize, inv: bool) {
        #[cfg(not(feature = "unsafe_disable_safety_checks"))]
        {
            if src >= self.outputs_count() || dst >= self.outputs_count() {
                panic!("{} {}", OUTPUT_OUT_OF_RANGE_PANIC_MSG, self.outputs_count());
            }
        }
        self.output_map[src] = VarMapping::new(dst, inv);
    }

    /// Iterator over the input mappings, in input order.
    pub fn input_mappings(&self) -> impl Iterator<Item = &VarMapping> + '_ {
        self.input_map.iter()
    }

    /// Iterator over the output mappings, in output order.
    pub fn output_mappings(&self) -> impl Iterator<Item = &VarMapping> + '_ {
        self.output_map.iter()
    }

    /// `true` if every entry maps to itself without inversion.
    pub fn is_identity(&self) -> bool {
        let is_identity = |entries: &[VarMapping]| {
            entries
                .iter()
                .enumerate()
                .all(|(src, mapping)| *mapping == VarMapping::new(src, false))
        };
        is_identity(&self.input_map) && is_identity(&self.output_map)
    }

    /// Single-output map sending the inputs like `self`, with output polarity `output_inv`.
    pub(crate) fn single_output_map(&self, output_inv: bool) -> VarMap {
        let mut map = VarMap::new(self.variables_count(), self.variables_count());
        for (src, mapping) in self.input_map.iter().enumerate() {
            if let VarMapping::Var { var, inv } = *mapping {
                map.set_input_map(src, var, inv);
            }
        }
        map.set_output_inv(output_inv);
        map
    }

    /// Composition `self * other`: `self` is applied first, then `other`.
    ///
    /// Returns `None` if the maps have different shapes, or if an entry of either map involved in the chain is unmapped.
    pub fn compose(&self, other: &MultiVarMap) -> Option<MultiVarMap> {
        if self.variables_count() != other.variables_count()
            || self.outputs_count() != other.outputs_count()
        {
            debug!(
                "cannot compose a {}x{} map with a {}x{} map",
                self.variables_count(),
                self.outputs_count(),
                other.variables_count(),
                other.outputs_count()
            );
            return None;
        }
        let compose_entries = |first: &[VarMapping], second: &[VarMapping]| {
            first
                .iter()
                .enumerate()
                .map(|(src, mapping)| {
                    let (mid, inv1) = match *mapping {
                        VarMapping::Var { var, inv } => (var, inv),
                        VarMapping::Invalid => {
                            debug!("cannot compose maps: entry {} is unmapped", src);
                            return None;
                        }
                    };
                    match second.get(mid).copied().unwrap_or_default() {
                        VarMapping::Var { var: dst, inv: inv2 } => {
                            Some(VarMapping::new(dst, inv1 ^ inv2))
                        }
                        VarMapping::Invalid => {
                            debug!("cannot compose maps: entry {} is sent to unmapped {}", src, mid);
                            None
                        }
                    }
                })
                .collect::<Option<Vec<_>>>()
        };
        Some(MultiVarMap {
            input_map: compose_entries(&self.input_map, &other.input_map)?,
            output_map: compose_entries(&self.output_map, &other.output_map)?,
        })
    }

    /// Inverse map, such that `self * inverse` is the identity.
    ///
    /// Returns `None` unless both the input and the output entries form bijections.
    pub fn inverse(&self) -> Option<MultiVarMap> {
        let invert_entries = |entries: &[VarMapping]| {
            let mut inverse = vec![VarMapping::Invalid; entries.len()];
            for (src, mapping) in entries.iter().enumerate() {
                let VarMapping::Var { var: dst, inv } = *mapping else {
                    debug!("cannot invert map: entry {} is unmapped", src);
                    return None;
                };
                if inverse[dst].is_valid() {
                    debug!("cannot invert map: {} is targeted twice", dst);
                    return None;
                }
                inverse[dst] = VarMapping::new(src, inv);
            }
            Some(inverse)
        };
        Some(MultiVarMap {
            input_map: invert_entries(&self.input_map)?,
            output_map: invert_entries(&self.output_map)?,
        })
    }

    /// Writes the input count, the output count, every input entry then every output entry.
    pub fn dump<W: Write>(&self, writer: &mut W) -> Result<(), TruthTableError> {
        write_u64(writer, self.variables_count() as u64)?;
        write_u64(writer, self.outputs_count() as u64)?;
        for mapping in self.input_map.iter().chain(&self.output_map) {
            mapping.dump(writer)?;
        }
        Ok(())
    }

    /// Reads a map written by [MultiVarMap::dump].
    pub fn restore<R: Read>(reader: &mut R) -> Result<Self, TruthTableError> {
        let variables_count = read_u64(reader)? as usize;
        let outputs_count = read_u64(reader)? as usize;
        if variables_count > MAX_VARIABLES_COUNT {
            return Err(TruthTableError::InvalidSerializedMap);
        }
        let input_map = (0..variables_count)
            .map(|_| VarMapping::restore(reader, variables_count))
            .collect::<Result<Vec<_>, _>>()?;
        let output_map = (0..outputs_count)
            .map(|_| VarMapping::restore(reader, outputs_count))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MultiVarMap {
            input_map,
            output_map,
        })
    }
}

/// Single-output map seen as a one-output map. Its output polarity becomes the output entry.
///
/// Only the entries of a square map are kept: input entries targeting variables out of range are dropped.
impl From<&VarMap> for MultiVarMap {
    fn from(map: &VarMap) -> Self {
        let variables_count = map.variables_count();
        MultiVarMap {
            input_map: map
                .input_mappings()
                .map(|mapping| match mapping.var() {
                    Some(var) if var < variables_count => *mapping,
                    _ => VarMapping::Invalid,
                })
                .collect(),
            output_map: vec![VarMapping::new(0, map.output_inv())],
        }
    }
}

/// Map composition, see [MultiVarMap::compose].
impl Mul for &MultiVarMap {
    type Output = Option<MultiVarMap>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl Display for MultiVarMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = |mappings: &[VarMapping]| {
            mappings
                .iter()
                .enumerate()
                .map(|(src, mapping)| format!("{} ==> {}", src, mapping))
                .join(", ")
        };
        write!(
            f,
            "MAP: {} -> {}, INPUT({}) OUTPUT({})",
            self.variables_count(),
            self.variables_count(),
            entries(&self.input_map),
            entries(&self.output_map)
        )
    }
}
