//! Diagnostics command - outputs system information for bug reports.

use launchgate::diagnostics::SystemReport;

use crate::error::CliError;

/// Run the diagnostics command.
pub fn run() -> Result<(), CliError> {
    let report = SystemReport::collect();
    println!("{}", report);
    Ok(())
}
