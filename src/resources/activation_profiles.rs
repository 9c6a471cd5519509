use super::{Collection, Resource};
use crate::api::ApiClient;
use serde::{Deserialize, Serialize};

/// Describes what a newly activated user receives: their plan, bundle,
/// contract, deployment environment and the regions they may use.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivationProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Unlike most resources, this is numeric on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_env_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate_regions: Option<Vec<ActivateRegion>>,
}

/// A cloud region users activated through a profile gain access to.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivateRegion {
    pub region_id: String,
}

impl Resource for ActivationProfile {
    const KIND: &'static str = "activation profile";
    const COLLECTION: &'static str = "activationProfiles";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl ApiClient {
    /// Activation profiles belonging to a tenant, at
    /// `/v1/tenants/{tenant_id}/activationProfiles`.
    pub fn activation_profiles(&self, tenant_id: &str) -> Collection<'_, ActivationProfile> {
        Collection::tenant_scoped(self, tenant_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn regions_are_nested_objects() {
        let profile = ActivationProfile {
            tenant_id: Some(1),
            name: Some("Client Library activation profile".to_string()),
            activate_regions: Some(vec![
                ActivateRegion { region_id: "1".to_string() },
                ActivateRegion { region_id: "2".to_string() },
            ]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({
                "tenantId": 1,
                "name": "Client Library activation profile",
                "activateRegions": [{"regionId": "1"}, {"regionId": "2"}],
            })
        );
    }
}
