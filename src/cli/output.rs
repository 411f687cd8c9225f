//! Output formatting for the demo result

use crate::domain::Operation;
use std::io::{self, Write};

/// Computed result of one invocation, ready for printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    pub operation: Operation,
    pub x: i64,
    pub y: i64,
    pub result: i64,
}

impl DemoReport {
    /// Verbose line naming the operation and both operands
    pub fn describe(&self) -> String {
        format!("{}: x = {}, y = {}", self.operation, self.x, self.y)
    }
}

/// Print the report to stdout.
///
/// In verbose mode the operation description precedes the result line;
/// the result line is always printed.
pub fn print_report(report: &DemoReport, verbose: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let handle = stdout.lock();
    write_report(handle, report, verbose)
}

/// Write the report to any writer (stdout in production, a buffer in tests)
pub fn write_report<W: Write>(mut writer: W, report: &DemoReport, verbose: bool) -> io::Result<()> {
    if verbose {
        writeln!(writer, "{}", report.describe())?;
    }
    writeln!(writer, "{}", report.result)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> DemoReport {
        DemoReport {
            operation: Operation::Add,
            x: 3,
            y: 4,
            result: 7,
        }
    }

    #[test]
    fn test_describe_mentions_operation_and_operands() {
        let line = report().describe();
        assert!(line.contains("add"));
        assert!(line.contains('3'));
        assert!(line.contains('4'));
    }

    #[test]
    fn test_write_report_plain() {
        let mut buf = Vec::new();
        write_report(&mut buf, &report(), false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "7\n");
    }

    #[test]
    fn test_write_report_verbose_is_superset() {
        let mut plain = Vec::new();
        write_report(&mut plain, &report(), false).unwrap();

        let mut verbose = Vec::new();
        write_report(&mut verbose, &report(), true).unwrap();

        let plain = String::from_utf8(plain).unwrap();
        let verbose = String::from_utf8(verbose).unwrap();
        assert!(verbose.ends_with(&plain));
        assert!(verbose.lines().count() > plain.lines().count());
    }

    #[test]
    fn test_write_report_multiply() {
        let report = DemoReport {
            operation: Operation::Multiply,
            x: 3,
            y: 4,
            result: 12,
        };

        let mut buf = Vec::new();
        write_report(&mut buf, &report, true).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("multiply"));
        assert!(output.contains("12"));
    }
}
