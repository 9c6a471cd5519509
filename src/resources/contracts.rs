use super::{Collection, Resource};
use crate::api::ApiClient;
use serde::{Deserialize, Deserializer, Serialize};

/// A billing contract offered within a tenant.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unlike other fields, permissions are always sent, even when empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub perms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Contract length, in months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    /// A percentage, e.g. `50.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_only_to_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_users: Option<i32>,
}

/// The server may send `null` for a contract without permissions.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Resource for Contract {
    const KIND: &'static str = "contract";
    const COLLECTION: &'static str = "contracts";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl ApiClient {
    /// Contracts belonging to a tenant, at `/v1/tenants/{tenant_id}/contracts`.
    pub fn contracts(&self, tenant_id: &str) -> Collection<'_, Contract> {
        Collection::tenant_scoped(self, tenant_id)
    }
}
