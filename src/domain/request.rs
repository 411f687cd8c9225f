//! Invocation request domain type
//!
//! The validated inputs of a single run: two integers, the selected
//! operation, and the verbose flag.

use crate::domain::Operation;

/// Parsed and validated inputs for a single invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    /// First operand
    pub x: i64,
    /// Second operand
    pub y: i64,
    /// Operation to perform
    pub operation: Operation,
    /// Whether to print the operation description before the result
    pub verbose: bool,
}

impl Request {
    /// Create a new request
    pub fn new(x: i64, y: i64, operation: Operation, verbose: bool) -> Self {
        Self {
            x,
            y,
            operation,
            verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_new() {
        let request = Request::new(3, 4, Operation::Multiply, true);
        assert_eq!(request.x, 3);
        assert_eq!(request.y, 4);
        assert_eq!(request.operation, Operation::Multiply);
        assert!(request.verbose);
    }
}
