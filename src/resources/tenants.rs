use super::{Collection, Resource};
use crate::api::ApiClient;
use serde::{Deserialize, Serialize};

/// A tenant, the unit of isolation every other resource hangs off of.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The tenant's administrating user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev_share_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_transaction_fee_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_app_fee_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_consolidated_billing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_purchase_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_email_notifications_to_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_tenant_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_activation_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_monthly_billing: Option<bool>,
    /// e.g. `Hourly`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_charge_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_default_user_security_group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_all_email_notification: Option<bool>,
    #[serde(rename = "trademarkURL", skip_serializing_if = "Option::is_none")]
    pub trademark_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<Preference>>,
}

/// A named tenant-wide setting, such as `PASSWORD_MIN_LENGTH`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Preference {
    pub name: String,
    pub value: String,
}

impl Resource for Tenant {
    const KIND: &'static str = "tenant";
    const COLLECTION: &'static str = "tenants";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl ApiClient {
    /// All tenants, at `/v1/tenants`.
    pub fn tenants(&self) -> Collection<'_, Tenant> {
        Collection::global(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn acronym_fields_keep_their_wire_names() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": "2",
            "shortName": "library",
            "trademarkURL": "https://example.com/tm",
            "revShareRate": 0.5,
            "preferences": [{"name": "PASSWORD_MIN_LENGTH", "value": "5"}],
        }))
        .unwrap();

        assert_eq!(tenant.trademark_url.as_deref(), Some("https://example.com/tm"));
        assert_eq!(tenant.rev_share_rate, Some(0.5));
        assert_eq!(tenant.preferences.as_ref().map(Vec::len), Some(1));

        let wire = serde_json::to_value(&tenant).unwrap();
        assert_eq!(wire["trademarkURL"], "https://example.com/tm");
        assert!(wire.get("name").is_none());
    }
}
