//! Submitting the validation request to the control plane.

use reqwest::header::LOCATION;

use super::request::MoveRequest;
use crate::azure::{ArmClient, API_VERSION, MANAGEMENT_ENDPOINT};
use crate::error::ArmvError;
use crate::poller::{PollOutcome, Probe, ProbeStep, API_ACCEPTED};

/// Continuation reference for one in-flight validation operation.
///
/// Returned by [`submit`] and owned exclusively by the poll loop for the
/// lifetime of one run; never persisted or reused.
pub struct OperationHandle<'a> {
    client: &'a ArmClient,
    status_url: String,
}

impl OperationHandle<'_> {
    /// URL the operation status is probed at.
    pub fn status_url(&self) -> &str {
        &self.status_url
    }
}

/// Submit a move validation request.
///
/// Issues exactly one POST to the versioned `validateMoveResources` endpoint.
/// The control plane accepts the request with 202 and hands back the
/// operation URL in the `Location` header.
///
/// # Returns
/// * `Ok(OperationHandle)` - The operation to poll
/// * `Err` - Authentication, missing resource group, or transport failure
pub async fn submit<'a>(
    client: &'a ArmClient,
    source_subscription_id: &str,
    source_resource_group: &str,
    request: &MoveRequest,
) -> Result<OperationHandle<'a>, ArmvError> {
    let url = format!(
        "{MANAGEMENT_ENDPOINT}/subscriptions/{source_subscription_id}/resourceGroups/{source_resource_group}/validateMoveResources?api-version={API_VERSION}"
    );
    log::info!(
        "Submitting move validation for {} resources from '{source_resource_group}'",
        request.resource_count()
    );

    let resp = client.post_json("validate-move submit", &url, request).await?;

    match resp.status().as_u16() {
        code if code == API_ACCEPTED => {
            let status_url = resp
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
                .ok_or(ArmvError::Api {
                    stage: "validate-move submit",
                    detail: "202 accepted without a Location header".to_string(),
                })?;
            log::debug!("Operation accepted, status url: {status_url}");
            Ok(OperationHandle { client, status_url })
        }
        401 | 403 => Err(ArmvError::Auth(format!(
            "not authorized to validate moves in resource group '{source_resource_group}'"
        ))),
        404 => Err(ArmvError::ResourceGroupNotFound(
            source_resource_group.to_string(),
        )),
        code => Err(ArmvError::Api {
            stage: "validate-move submit",
            detail: format!("status {code}"),
        }),
    }
}

impl Probe for OperationHandle<'_> {
    /// Issue one status probe against the operation URL.
    async fn probe(&mut self) -> Result<ProbeStep, ArmvError> {
        let resp = self.client.get("validation poll", &self.status_url).await?;
        let status = resp.status();

        if status.as_u16() == API_ACCEPTED {
            return Ok(ProbeStep::Pending);
        }

        let status_text = status.canonical_reason().unwrap_or("").to_string();
        let body = resp
            .bytes()
            .await
            .map_err(|source| ArmvError::Transport {
                stage: "validation poll",
                source,
            })?
            .to_vec();
        Ok(ProbeStep::Terminal(PollOutcome {
            status_code: status.as_u16(),
            body,
            status_text,
        }))
    }
}
