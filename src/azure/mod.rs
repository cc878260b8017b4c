//! Azure control-plane interaction.
//!
//! This module handles all Azure Resource Manager operations:
//! - [`auth`] - Credential acquisition and login check
//! - [`client`] - Shared HTTP client for the management endpoint
//! - [`resource_groups`] - Resource group existence and id lookup
//! - [`resources`] - Paginated resource enumeration

mod auth;
mod client;
mod resource_groups;
mod resources;

// Re-export public types and functions
pub use auth::{check_login, get_access_token};
pub use client::{ArmClient, API_VERSION, MANAGEMENT_ENDPOINT};
pub use resource_groups::{resource_group_exists, resource_group_id};
pub use resources::list_resource_ids;

use crate::error::ArmvError;

/// Read-only directory of resource groups and their contents.
///
/// The pipeline talks to the control plane through this seam so the
/// pre-submission checks can be exercised without a network.
#[allow(async_fn_in_trait)]
pub trait ResourceDirectory {
    /// Check whether a resource group exists in a subscription.
    async fn resource_group_exists(
        &self,
        subscription_id: &str,
        resource_group: &str,
    ) -> Result<bool, ArmvError>;

    /// Resolve a resource group to its full ARM id.
    async fn resource_group_id(
        &self,
        subscription_id: &str,
        resource_group: &str,
    ) -> Result<String, ArmvError>;

    /// List the ids of every resource in a resource group.
    async fn resource_ids(
        &self,
        subscription_id: &str,
        resource_group: &str,
    ) -> Result<Vec<String>, ArmvError>;
}

impl ResourceDirectory for ArmClient {
    async fn resource_group_exists(
        &self,
        subscription_id: &str,
        resource_group: &str,
    ) -> Result<bool, ArmvError> {
        resource_group_exists(self, subscription_id, resource_group).await
    }

    async fn resource_group_id(
        &self,
        subscription_id: &str,
        resource_group: &str,
    ) -> Result<String, ArmvError> {
        resource_group_id(self, subscription_id, resource_group).await
    }

    async fn resource_ids(
        &self,
        subscription_id: &str,
        resource_group: &str,
    ) -> Result<Vec<String>, ArmvError> {
        list_resource_ids(self, subscription_id, resource_group).await
    }
}
