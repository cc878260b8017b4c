//! Colored terminal banners for the validation outcome.

use colored::Colorize;

use super::report::{OutcomeKind, ValidationReport};

const FRAME: &str = "*****************************************************************";

/// Print the outcome banner.
pub fn render(report: &ValidationReport) {
    match report.kind {
        OutcomeKind::Success => {
            println!("\n{}", FRAME.green().bold());
            println!("{}", report.detail.green());
            println!("{}", FRAME.green().bold());
        }
        OutcomeKind::Conflict => {
            println!("\n{}", FRAME.red().bold());
            println!(
                "{}",
                format!("*** Source ResourceGroup - '{}' ***", report.source_resource_group).red()
            );
            println!("{}", "*** Error Details: ***".red());
            println!("{}", report.detail.red());
            println!("{}", FRAME.red().bold());
        }
    }
}
