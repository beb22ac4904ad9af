use crate::puzzle::Value;
use crate::solve::ValueSet;

/// The state of one cell during solving: assigned, or a set of candidates.
///
/// An assigned cell's domain is its singleton value by construction, so the
/// domain invariant for assigned cells cannot be violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellVariable {
    Solved(Value),
    Unsolved(ValueSet),
}

impl CellVariable {
    pub fn unsolved_with_all() -> CellVariable {
        CellVariable::Unsolved(ValueSet::with_all())
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, CellVariable::Solved(_))
    }

    pub fn is_unsolved(&self) -> bool {
        matches!(self, CellVariable::Unsolved(_))
    }

    pub fn solved(&self) -> Option<Value> {
        match *self {
            CellVariable::Solved(value) => Some(value),
            _ => None,
        }
    }

    pub fn unsolved(&self) -> Option<ValueSet> {
        match *self {
            CellVariable::Unsolved(domain) => Some(domain),
            _ => None,
        }
    }

    /// The domain of the cell; a singleton for a solved cell
    pub fn domain(&self) -> ValueSet {
        match *self {
            CellVariable::Solved(value) => ValueSet::single(value),
            CellVariable::Unsolved(domain) => domain,
        }
    }

    /// The value of the cell if its domain is a singleton, solved or not
    pub fn determined_value(&self) -> Option<Value> {
        match *self {
            CellVariable::Solved(value) => Some(value),
            CellVariable::Unsolved(domain) => domain.single_value(),
        }
    }
}
