//! Command-line argument surface.
//!
//! Subscription ids are validated against the GUID pattern before any
//! network call is made.

use clap::Parser;
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::ArmvError;

const ABOUT: &str = "\
Azure Resource Movability Validator

Checks whether the resources in a source resource group can be moved to the
target resource group in the same tenant. If validation succeeds the API
returns HTTP 204 (no content); if it fails the API returns HTTP 409
(Conflict) with an error body. This only reads resources - NO changes are
made.";

/// Parsed command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "armv", version, about = ABOUT)]
pub struct Args {
    /// Source Subscription Id.
    #[arg(long)]
    pub source_subscription_id: String,

    /// Source Resource Group.
    #[arg(long)]
    pub source_resource_group: String,

    /// Target Subscription Id.
    #[arg(long)]
    pub target_subscription_id: String,

    /// Target Resource Group.
    #[arg(long)]
    pub target_resource_group: String,

    /// Enable debug mode with timing information.
    #[arg(long)]
    pub debug: bool,

    /// Directory to write the validation report to.
    #[arg(long, default_value = "./output")]
    pub output_path: PathBuf,
}

impl Args {
    /// Check both subscription ids for validity.
    ///
    /// # Returns
    /// * `Ok(())` - Both ids match the GUID pattern
    /// * `Err` - A usage error naming the offending argument
    pub fn validate(&self) -> Result<(), ArmvError> {
        for (label, id) in [
            ("Source", &self.source_subscription_id),
            ("Target", &self.target_subscription_id),
        ] {
            if !check_valid_subscription_id(id) {
                return Err(ArmvError::Usage(format!(
                    "invalid {label} Subscription ID format: should be '0000-0000-0000-000000000000'"
                )));
            }
        }
        Ok(())
    }
}

static SUBSCRIPTION_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn subscription_id_regex() -> &'static Regex {
    SUBSCRIPTION_ID_REGEX.get_or_init(|| {
        Regex::new(
            r"^(\{{0,1}([0-9a-fA-F]){8}-([0-9a-fA-F]){4}-([0-9a-fA-F]){4}-([0-9a-fA-F]){4}-([0-9a-fA-F]){12}\}{0,1})$",
        )
        .expect("Invalid Regex")
    })
}

/// Check that a subscription id is a well-formed GUID.
pub fn check_valid_subscription_id(subscription_id: &str) -> bool {
    subscription_id_regex().is_match(subscription_id)
}
