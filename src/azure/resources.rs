//! Paginated enumeration of the resources in a resource group.

use serde::Deserialize;

use super::client::{parse_json, ArmClient, API_VERSION, MANAGEMENT_ENDPOINT};
use crate::error::ArmvError;

/// One page of the ARM resource listing.
#[derive(Deserialize, Debug, Default)]
struct ResourcePage {
    /// Resources on this page.
    #[serde(default)]
    value: Vec<ResourceEntry>,
    /// Continuation URL for the next page, absent on the last page.
    #[serde(rename = "nextLink")]
    next_link: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ResourceEntry {
    id: String,
}

/// List the ids of all resources in a resource group.
///
/// Follows `nextLink` continuation URLs until the listing is exhausted.
/// Each id is captured as an independently owned `String`.
///
/// # Returns
/// * `Ok(Vec<String>)` - All resource ids, in listing order
/// * `Err` - If a page cannot be fetched or parsed
pub async fn list_resource_ids(
    client: &ArmClient,
    subscription_id: &str,
    resource_group: &str,
) -> Result<Vec<String>, ArmvError> {
    let mut url = format!(
        "{MANAGEMENT_ENDPOINT}/subscriptions/{subscription_id}/resourceGroups/{resource_group}/resources?api-version={API_VERSION}"
    );
    let mut resource_ids: Vec<String> = Vec::new();
    let mut page_count = 0;

    loop {
        let resp = client.get("resource listing", &url).await?;
        if !resp.status().is_success() {
            return Err(ArmvError::Api {
                stage: "resource listing",
                detail: format!("status {} for resource group '{resource_group}'", resp.status()),
            });
        }

        let body = resp.text().await.map_err(|source| ArmvError::Transport {
            stage: "resource listing",
            source,
        })?;
        let page: ResourcePage = parse_json("resource listing", &body)?;

        let count = page.value.len();
        resource_ids.extend(page.value.into_iter().map(|r| r.id));
        log::info!(
            "got page#{page_count:2} resource_count=+{count:3} => {total:3}",
            total = resource_ids.len()
        );

        match page.next_link {
            Some(next) => {
                if next == url {
                    return Err(ArmvError::Api {
                        stage: "resource listing",
                        detail: "continuation link not unique - possible infinite loop".to_string(),
                    });
                }
                url = next;
            }
            None => break,
        }
        page_count += 1;
    }

    log::info!(
        "Got {} resource ids from resource group '{resource_group}'",
        resource_ids.len()
    );
    Ok(resource_ids)
}
