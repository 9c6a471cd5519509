use super::{Collection, Resource};
use crate::api::{ApiClient, Result};
use serde::{Deserialize, Serialize};

/// A user account. Users live outside of any tenant's path, but belong to
/// the tenant named by `tenant_id`.
///
/// When creating a user, the API requires `password`, `email_addr` and
/// `tenant_id` at a minimum.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_keys: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_data: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_subscription_plan_type: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl Resource for User {
    const KIND: &'static str = "user";
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl ApiClient {
    /// All users, at `/v1/users`.
    pub fn users(&self) -> Collection<'_, User> {
        Collection::global(self)
    }
}

impl Collection<'_, User> {
    /// Looks up a user by their exact email address.
    ///
    /// There's no endpoint to query users by email, so we scan the first
    /// page of `/v1/users` and re-fetch whichever user matches. Users beyond
    /// the first page are never considered.
    pub async fn find_by_email(&self, email: &str) -> Result<User> {
        self.find_by(|user| user.email_addr.as_deref() == Some(email))
            .await
    }

    /// Deletes a user by their exact email address, with the same
    /// first-page limitation as [`Collection::find_by_email`].
    pub async fn delete_by_email(&self, email: &str) -> Result<()> {
        self.delete_by(|user| user.email_addr.as_deref() == Some(email))
            .await
    }
}
