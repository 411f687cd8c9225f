//! Arithmetic operation domain type

use std::fmt;

/// The arithmetic operation selected for a single invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Add the two inputs (the default)
    #[default]
    Add,
    /// Multiply the two inputs
    Multiply,
}

impl Operation {
    /// Select the operation from the `--multiply` flag
    pub fn from_multiply_flag(multiply: bool) -> Self {
        if multiply {
            Operation::Multiply
        } else {
            Operation::Add
        }
    }

    /// Operation name used in verbose reporting
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply the operation to the two operands.
    ///
    /// Arithmetic is over `i64` with wrapping on overflow; wraparound is
    /// implementation-defined and out of contract for this demo.
    pub fn apply(&self, x: i64, y: i64) -> i64 {
        match self {
            Operation::Add => x.wrapping_add(y),
            Operation::Multiply => x.wrapping_mul(y),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
