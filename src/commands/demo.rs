//! Demo command implementation
//!
//! Computes the requested operation and prints the report.

use crate::cli::output::{print_report, DemoReport};
use crate::domain::Request;
use crate::error::Result;

/// Execute the demo command for a parsed request
pub fn run_demo(request: &Request) -> Result<()> {
    let report = compute(request);
    log::debug!(
        "{}: x={} y={} result={}",
        report.operation,
        report.x,
        report.y,
        report.result
    );

    print_report(&report, request.verbose)?;

    Ok(())
}

/// Compute the result for a request
pub fn compute(request: &Request) -> DemoReport {
    DemoReport {
        operation: request.operation,
        x: request.x,
        y: request.y,
        result: request.operation.apply(request.x, request.y),
    }
}
