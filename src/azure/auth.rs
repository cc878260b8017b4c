//! Credential acquisition and login check.
//!
//! Uses the ambient default credential chain (environment, managed identity,
//! Azure CLI) to obtain a bearer token for the management endpoint.

use azure_core::auth::TokenCredential;
use azure_identity::DefaultAzureCredential;

use super::client::{ArmClient, API_VERSION, MANAGEMENT_ENDPOINT};
use crate::error::ArmvError;

/// OAuth scope for Azure Resource Manager.
const MANAGEMENT_SCOPE: &str = "https://management.azure.com/.default";

/// Acquire a bearer token from the default Azure credential chain.
///
/// # Returns
/// * `Ok(String)` - The access token secret
/// * `Err` - If no ambient credential can produce a management token
pub async fn get_access_token() -> Result<String, ArmvError> {
    let credential = DefaultAzureCredential::default();
    let token = credential
        .get_token(&[MANAGEMENT_SCOPE])
        .await
        .map_err(|e| ArmvError::Auth(format!("failed to acquire management token: {e}")))?;
    Ok(token.token.secret().to_string())
}

/// Confirm the credential can actually see the subscription.
///
/// A non-success answer means the caller is not logged into that
/// subscription, which is treated as an authentication failure.
pub async fn check_login(client: &ArmClient, subscription_id: &str) -> Result<(), ArmvError> {
    let url =
        format!("{MANAGEMENT_ENDPOINT}/subscriptions/{subscription_id}?api-version={API_VERSION}");
    let resp = client.get("login check", &url).await?;

    if resp.status().is_success() {
        log::info!("Logged into subscription {subscription_id}");
        Ok(())
    } else {
        Err(ArmvError::Auth(format!(
            "you are not logged into the azure subscription '{subscription_id}', \
             please login and retry operation (status {})",
            resp.status()
        )))
    }
}
