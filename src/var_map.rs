use crate::truth_table_error::TruthTableError;
use crate::utils::{
    check_variable_index, read_bool, read_i64, read_u64, write_bool, write_i64, write_u64,
    MAX_VARIABLES_COUNT,
};
use itertools::Itertools;
use log::debug;
use std::fmt::Display;
use std::io::{Read, Write};
use std::ops::Mul;

/// Destination of a single variable in a [VarMap]: either nothing, or a target variable with a polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VarMapping {
    /// The variable is dropped.
    #[default]
    Invalid,
    /// The variable is sent to `var`, complemented if `inv` is `true`.
    Var {
        /// Target variable index
        var: usize,
        /// Polarity flip
        inv: bool,
    },
}

impl VarMapping {
    /// Mapping to `var` with polarity `inv`.
    pub fn new(var: usize, inv: bool) -> Self {
        VarMapping::Var { var, inv }
    }

    /// `true` if the variable is dropped.
    pub fn is_invalid(&self) -> bool {
        matches!(self, VarMapping::Invalid)
    }

    /// `true` if the variable has a target.
    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    /// Target variable, if any.
    pub fn var(&self) -> Option<usize> {
        match self {
            VarMapping::Var { var, .. } => Some(*var),
            VarMapping::Invalid => None,
        }
    }

    /// Polarity flip, `false` for an invalid mapping.
    pub fn inv(&self) -> bool {
        match self {
            VarMapping::Var { inv, .. } => *inv,
            VarMapping::Invalid => false,
        }
    }

    pub(crate) fn dump<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        match self {
            VarMapping::Var { var, inv } => {
                write_i64(writer, *var as i64)?;
                write_bool(writer, *inv)
            }
            VarMapping::Invalid => {
                write_i64(writer, -1)?;
                write_bool(writer, false)
            }
        }
    }

    /// Reads an entry whose target must be below `range`.
    pub(crate) fn restore<R: Read>(reader: &mut R, range: usize) -> Result<Self, TruthTableError> {
        let var = read_i64(reader)?;
        let inv = read_bool(reader)?.ok_or(TruthTableError::InvalidSerializedMap)?;
        match var {
            -1 => Ok(VarMapping::Invalid),
            var if var >= 0 && (var as usize) < range => Ok(VarMapping::new(var as usize, inv)),
            _ => Err(TruthTableError::InvalidSerializedMap),
        }
    }
}

impl Display for VarMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarMapping::Var { var, inv: true } => write!(f, "~{}", var),
            VarMapping::Var { var, inv: false } => write!(f, "{}", var),
            VarMapping::Invalid => write!(f, "---"),
        }
    }
}

/// Variable transform applied by [TruthTable::xform](crate::TruthTable::xform): an input permutation,
/// per-input polarity flips and an output polarity flip.
///
/// Input variable `src` of the original function is sent to the mapped variable of the transformed one:
/// if `src` maps to `(dst, inv)`, the transformed function $g$ satisfies
/// $g(y) = f(x) \oplus o$ with $x_{src} = y_{dst} \oplus inv$, where $o$ is the output polarity.
///
/// # Example
/// ```rust
/// use npn_truth_table::{VarMap, VarMapping};
///
/// let mut map = VarMap::new(2, 2);
/// map.set_input_map(0, 1, false);
/// map.set_input_map(1, 0, true);
/// assert_eq!(map.input_map(1), VarMapping::new(0, true));
/// assert_eq!(map.to_string(), "MAP: 2 -> 2, INPUT(0 ==> 1, 1 ==> ~0) OUTPUT(0 ==> 0)");
///
/// let inverse = map.inverse().unwrap();
/// assert_eq!((&map * &inverse).unwrap(), VarMap::identity(2, false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarMap {
    variables_count2: usize,
    input_map: Vec<VarMapping>,
    output_inv: bool,
}

impl VarMap {
    /// Map from `variables_count` to `variables_count2` variables with every input unmapped.
    pub fn new(variables_count: usize, variables_count2: usize) -> Self {
        VarMap {
            variables_count2,
            input_map: vec![VarMapping::Invalid; variables_count],
            output_inv: false,
        }
    }

    /// Identity map on `variables_count` variables, with optional output inversion.
    pub fn identity(variables_count: usize, output_inv: bool) -> Self {
        VarMap {
            variables_count2: variables_count,
            input_map: (0..variables_count)
                .map(|var| VarMapping::new(var, false))
                .collect(),
            output_inv,
        }
    }

    /// Number of variables before the transform.
    #[inline]
    pub fn variables_count(&self) -> usize {
        self.input_map.len()
    }

    /// Number of variables after the transform.
    #[inline]
    pub fn variables_count2(&self) -> usize {
        self.variables_count2
    }

    /// Mapping of input `var`, [VarMapping::Invalid] if `var` is out of range.
    pub fn input_map(&self, var: usize) -> VarMapping {
        self.input_map
            .get(var)
            .copied()
            .unwrap_or(VarMapping::Invalid)
    }

    /// Sends input `src` to `dst` with polarity `inv`.
    ///
    /// # Panics
    /// If `src >= variables_count()` or `dst >= variables_count2()`, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn set_input_map(&mut self, src: usize, dst: usize, inv: bool) {
        check_variable_index(src, self.variables_count());
        check_variable_index(dst, self.variables_count2);
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

    /// Output polarity flip.
    #[inline]
    pub fn output_inv(&self) -> bool {
        self.output_inv
    }

    /// Sets the output polarity flip.
    pub fn set_output_inv(&mut self, inv: bool) {
        self.output_inv = inv;
    }

    /// Iterator over the input mappings, in input order.
    pub fn input_mappings(&self) -> impl Iterator<Item = &VarMapping> + '_ {
        self.input_map.iter()
    }

    /// `true` if the map is the identity without output inversion.
    pub fn is_identity(&self) -> bool {
        !self.output_inv
            && self.variables_count() == self.variables_count2
            && self
                .input_map
                .iter()
                .enumerate()
                .all(|(src, mapping)| *mapping == VarMapping::new(src, false))
    }

    /// Composition `self * other`: `self` is applied first, then `other`.
    ///
    /// An input dropped by `self` stays dropped. Returns `None` if `self.variables_count2() != other.variables_count()`,
    /// or if `other` drops a variable `self` maps something onto.
    pub fn compose(&self, other: &VarMap) -> Option<VarMap> {
        if self.variables_count2 != other.variables_count() {
            debug!(
                "cannot compose a map onto {} variables with a map from {} variables",
                self.variables_count2,
                other.variables_count()
            );
            return None;
        }
        let mut composed = VarMap::new(self.variables_count(), other.variables_count2);
        for (src, mapping) in self.input_map.iter().enumerate() {
            if let VarMapping::Var { var: mid, inv: inv1 } = *mapping {
                match other.input_map(mid) {
                    VarMapping::Var { var: dst, inv: inv2 } => {
                        composed.input_map[src] = VarMapping::new(dst, inv1 ^ inv2);
                    }
                    VarMapping::Invalid => {
                        debug!(
                            "cannot compose maps: input {} is sent to variable {} which is dropped",
                            src, mid
                        );
                        return None;
                    }
                }
            }
        }
        composed.output_inv = self.output_inv ^ other.output_inv;
        Some(composed)
    }

    /// Inverse map, such that `self * inverse` is the identity.
    ///
    /// Returns `None` if the map is not a bijection: different variable counts, a dropped input, or two inputs sharing a target.
    pub fn inverse(&self) -> Option<VarMap> {
        if self.variables_count() != self.variables_count2 {
            debug!(
                "cannot invert a map from {} to {} variables",
                self.variables_count(),
                self.variables_count2
            );
            return None;
        }
        let mut inverse = VarMap::new(self.variables_count2, self.variables_count());
        for (src, mapping) in self.input_map.iter().enumerate() {
            let VarMapping::Var { var: dst, inv } = *mapping else {
                debug!("cannot invert map: input {} is dropped", src);
                return None;
            };
            if inverse.input_map[dst].is_valid() {
                debug!("cannot invert map: variable {} is targeted twice", dst);
                return None;
            }
            inverse.input_map[dst] = VarMapping::new(src, inv);
        }
        inverse.output_inv = self.output_inv;
        Some(inverse)
    }

    /// `true` if every valid target is below `variables_count2()` and the map starts from `variables_count` variables.
    pub(crate) fn is_well_formed_for(&self, variables_count: usize) -> bool {
        self.variables_count() == variables_count
            && self.variables_count2 <= MAX_VARIABLES_COUNT
            && self
                .input_map
                .iter()
                .filter_map(VarMapping::var)
                .all(|dst| dst < self.variables_count2)
    }

    /// Writes the map: both variable counts, every input entry as `(target, polarity)` with target -1 for a dropped input,
    /// then the output polarity.
    pub fn dump<W: Write>(&self, writer: &mut W) -> Result<(), TruthTableError> {
        write_u64(writer, self.variables_count() as u64)?;
        write_u64(writer, self.variables_count2 as u64)?;
        for mapping in &self.input_map {
            mapping.dump(writer)?;
        }
        write_bool(writer, self.output_inv)?;
        Ok(())
    }

    /// Reads a map written by [VarMap::dump].
    pub fn restore<R: Read>(reader: &mut R) -> Result<Self, TruthTableError> {
        let variables_count = read_u64(reader)? as usize;
        let variables_count2 = read_u64(reader)? as usize;
        if variables_count > MAX_VARIABLES_COUNT || variables_count2 > MAX_VARIABLES_COUNT {
            return Err(TruthTableError::InvalidSerializedMap);
        }
        let input_map = (0..variables_count)
            .map(|_| VarMapping::restore(reader, variables_count2))
            .collect::<Result<Vec<_>, _>>()?;
        let output_inv = read_bool(reader)?.ok_or(TruthTableError::InvalidSerializedMap)?;
        Ok(VarMap {
            variables_count2,
            input_map,
            output_inv,
        })
    }
}

/// Map composition, see [VarMap::compose].
impl Mul for &VarMap {
    type Output = Option<VarMap>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

/// Map composition, see [VarMap::compose].
impl Mul for VarMap {
    type Output = Option<VarMap>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}

impl Display for VarMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MAP: {} -> {}, INPUT({}) OUTPUT(0 ==> {}0)",
            self.variables_count(),
            self.variables_count2,
            self.input_map
                .iter()
                .enumerate()
                .map(|(src, mapping)| format!("{} ==> {}", src, mapping))
                .join(", "),
            if self.output_inv { "~" } else { "" }
        )
    }
}

#[cfg(test)]
impl VarMap {
    /// Random permutation with random input and output polarities.
    pub(crate) fn random_bijection<R: rand::Rng>(rng: &mut R, variables_count: usize) -> Self {
        use rand::seq::SliceRandom;

        let mut targets = (0..variables_count).collect::<Vec<_>>();
        targets.shuffle(rng);
        let mut map = VarMap::new(variables_count, variables_count);
        for (src, dst) in targets.into_iter().enumerate() {
            map.set_input_map(src, dst, rng.gen_bool(0.5));
        }
        map.set_output_inv(rng.gen_bool(0.5));
        map
    }
}
