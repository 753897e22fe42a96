use std::fmt::Display;
use std::ops::Not;

/// A variable with a polarity, as used in product terms.
///
/// # Example
/// ```rust
/// use npn_truth_table::Literal;
///
/// let literal = Literal::positive(2);
/// assert_eq!(literal.var(), 2);
/// assert!(!literal.is_negative());
/// assert_eq!(!literal, Literal::negative(2));
/// assert_eq!((!literal).to_string(), "~x2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    var: usize,
    inv: bool,
}

impl Literal {
    /// Literal on variable `var`, negative if `inv` is `true`.
    pub fn new(var: usize, inv: bool) -> Self {
        Literal { var, inv }
    }

    /// Positive literal $x_{var}$.
    pub fn positive(var: usize) -> Self {
        Self::new(var, false)
    }

    /// Negative literal $\overline{x_{var}}$.
    pub fn negative(var: usize) -> Self {
        Self::new(var, true)
    }

    /// Variable index.
    pub fn var(&self) -> usize {
        self.var
    }

    /// `true` for a negative literal.
    pub fn is_negative(&self) -> bool {
        self.inv
    }

    /// `true` for a positive literal.
    pub fn is_positive(&self) -> bool {
        !self.inv
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Literal::new(self.var, !self.inv)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.inv {
            write!(f, "~")?;
        }
        write!(f, "x{}", self.var)
    }
}
