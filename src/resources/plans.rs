use super::{Collection, Resource};
use crate::api::ApiClient;
use serde::{Deserialize, Serialize};

/// A subscription plan users within a tenant can be placed on.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// e.g. `UNLIMITED_PLAN`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_only_to_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onetime_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_vendor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl Resource for Plan {
    const KIND: &'static str = "plan";
    const COLLECTION: &'static str = "plans";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl ApiClient {
    /// Plans belonging to a tenant, at `/v1/tenants/{tenant_id}/plans`.
    pub fn plans(&self, tenant_id: &str) -> Collection<'_, Plan> {
        Collection::tenant_scoped(self, tenant_id)
    }
}
