//! Resource group existence check and id lookup.

use serde::Deserialize;

use super::client::{parse_json, ArmClient, API_VERSION, MANAGEMENT_ENDPOINT};
use crate::error::ArmvError;

/// Subset of the ARM resource group representation we care about.
#[derive(Deserialize, Debug)]
pub struct ResourceGroup {
    /// Full ARM id, `/subscriptions/{sub}/resourceGroups/{name}`.
    pub id: String,
    /// Resource group name.
    pub name: String,
}

fn group_url(subscription_id: &str, resource_group: &str) -> String {
    format!(
        "{MANAGEMENT_ENDPOINT}/subscriptions/{subscription_id}/resourcegroups/{resource_group}?api-version={API_VERSION}"
    )
}

/// Check whether a resource group exists.
///
/// ARM answers the HEAD existence probe with 204 when the group exists and
/// 404 when it does not.
pub async fn resource_group_exists(
    client: &ArmClient,
    subscription_id: &str,
    resource_group: &str,
) -> Result<bool, ArmvError> {
    let url = group_url(subscription_id, resource_group);
    let resp = client.head("resource group existence check", &url).await?;

    match resp.status().as_u16() {
        204 => Ok(true),
        404 => Ok(false),
        code => Err(ArmvError::Api {
            stage: "resource group existence check",
            detail: format!("status {code} for resource group '{resource_group}'"),
        }),
    }
}

/// Resolve a resource group to its full ARM id.
pub async fn resource_group_id(
    client: &ArmClient,
    subscription_id: &str,
    resource_group: &str,
) -> Result<String, ArmvError> {
    let url = group_url(subscription_id, resource_group);
    let resp = client.get("resource group lookup", &url).await?;

    if resp.status().as_u16() == 404 {
        return Err(ArmvError::ResourceGroupNotFound(resource_group.to_string()));
    }
    if !resp.status().is_success() {
        return Err(ArmvError::Api {
            stage: "resource group lookup",
            detail: format!("status {} for resource group '{resource_group}'", resp.status()),
        });
    }

    let body = resp.text().await.map_err(|source| ArmvError::Transport {
        stage: "resource group lookup",
        source,
    })?;
    let group: ResourceGroup = parse_json("resource group lookup", &body)?;
    log::debug!("Resolved resource group '{}' to id {}", group.name, group.id);
    Ok(group.id)
}
