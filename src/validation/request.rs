//! The move validation request model.

use serde::Serialize;

use crate::error::ArmvError;

/// Body of the `validateMoveResources` call.
///
/// Built once per run and immutable thereafter. An empty resource list is a
/// usage error, not a silently accepted no-op.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MoveRequest {
    /// Ids of the resources to validate, in listing order.
    resources: Vec<String>,
    /// Full ARM id of the target resource group.
    #[serde(rename = "targetResourceGroup")]
    target_resource_group: String,
}

impl MoveRequest {
    /// Build a move request from owned resource ids and the target group id.
    ///
    /// # Returns
    /// * `Ok(MoveRequest)` - At least one resource id was supplied
    /// * `Err(EmptyMoveRequest)` - The id list was empty
    pub fn new(
        resources: Vec<String>,
        target_resource_group: String,
    ) -> Result<Self, ArmvError> {
        if resources.is_empty() {
            return Err(ArmvError::EmptyMoveRequest);
        }
        Ok(MoveRequest {
            resources,
            target_resource_group,
        })
    }

    /// Number of resources in the request.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// The resource ids, in the order they were collected.
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// The target resource group id.
    pub fn target_resource_group(&self) -> &str {
        &self.target_resource_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preserves_order() {
        let ids = vec!["/sub/a".to_string(), "/sub/b".to_string(), "/sub/c".to_string()];
        let request = MoveRequest::new(ids.clone(), "/sub/rg".to_string())
            .expect("Non-empty request should build");
        assert_eq!(request.resources(), ids.as_slice(), "Order must be preserved");
        assert_eq!(request.resource_count(), 3);
        assert_eq!(request.target_resource_group(), "/sub/rg");
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = MoveRequest::new(vec![], "/sub/rg".to_string())
            .expect_err("Empty request must be a usage error");
        assert!(matches!(err, ArmvError::EmptyMoveRequest));
    }

    #[test]
    fn test_wire_shape() {
        let request = MoveRequest::new(
            vec!["/subscriptions/s/resourceGroups/rg/providers/p/x".to_string()],
            "/subscriptions/s/resourceGroups/target".to_string(),
        )
        .expect("Request should build");
        let json = serde_json::to_value(&request).expect("Request should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "resources": ["/subscriptions/s/resourceGroups/rg/providers/p/x"],
                "targetResourceGroup": "/subscriptions/s/resourceGroups/target",
            }),
            "Wire body must use the ARM field names"
        );
    }
}
