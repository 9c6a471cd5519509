use super::{Collection, Resource};
use crate::api::ApiClient;
use serde::{Deserialize, Serialize};

/// A prepaid bundle, e.g. a `BUDGET_BUNDLE` adding budget to a user's plan.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
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
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub bundle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_only_to_admin: Option<bool>,
}

impl Resource for Bundle {
    const KIND: &'static str = "bundle";
    const COLLECTION: &'static str = "bundles";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl ApiClient {
    /// Bundles belonging to a tenant, at `/v1/tenants/{tenant_id}/bundles`.
    pub fn bundles(&self, tenant_id: &str) -> Collection<'_, Bundle> {
        Collection::tenant_scoped(self, tenant_id)
    }
}
