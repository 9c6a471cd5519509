//! Typed operations over the API's resource collections.
//!
//! Every resource kind shares one shape: a collection path, an item path
//! below it, and a list envelope wrapping a page of records. Rather than
//! spelling out each request by hand, a [`Collection`] handle describes
//! that shape once and hands (method, URL, body) to the [`ApiClient`].

mod activation_profiles;
mod bundles;
mod contracts;
mod plans;
mod tenants;
mod users;

pub use activation_profiles::{ActivateRegion, ActivationProfile};
pub use bundles::Bundle;
pub use contracts::Contract;
pub use plans::Plan;
pub use tenants::{Preference, Tenant};
pub use users::User;

use crate::api::{ApiClient, ApiError, Result};
use reqwest::Method;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{future::Future, marker::PhantomData};
use tracing::{debug, instrument};
use url::Url;

/// A record type exposed by the API.
pub trait Resource: Serialize + DeserializeOwned {
    /// Singular, human-readable name, e.g. `user`.
    const KIND: &'static str;

    /// The collection's path segment, which is also the key its records
    /// are listed under within the list envelope, e.g. `users`.
    const COLLECTION: &'static str;

    /// The server-assigned identity, if this record has one yet.
    fn id(&self) -> Option<&str>;
}

/// A single page of a collection, alongside its pagination metadata.
///
/// The API only ever hands back the first page to our list requests;
/// nothing in this crate follows on to subsequent pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    /// The collection type, as tagged by the server.
    pub resource: String,
    pub size: i64,
    pub page_number: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub records: Vec<R>,
}

/// The envelope as it appears on the wire.
///
/// The key holding the records differs per resource, so we collect
/// everything we don't recognize and pick it out afterwards.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    resource: Option<String>,
    size: Option<i64>,
    page_number: Option<i64>,
    total_elements: Option<i64>,
    total_pages: Option<i64>,
    #[serde(flatten)]
    remaining: serde_json::Map<String, serde_json::Value>,
}

impl<R: Resource> Page<R> {
    /// Decodes a list envelope, taking records from the resource's collection key.
    /// An absent or `null` record list is an empty page.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let mut raw: RawPage = serde_json::from_slice(body)?;
        let records = match raw.remaining.remove(R::COLLECTION) {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(records) => serde_json::from_value(records)?,
        };

        Ok(Self {
            resource: raw.resource.unwrap_or_default(),
            size: raw.size.unwrap_or_default(),
            page_number: raw.page_number.unwrap_or_default(),
            total_elements: raw.total_elements.unwrap_or_default(),
            total_pages: raw.total_pages.unwrap_or_default(),
            records,
        })
    }
}

/// Stands in for the body of requests that don't send one.
const NO_BODY: Option<&()> = None;

/// A handle on one resource collection, e.g. `/v1/users` or
/// `/v1/tenants/1/contracts`.
///
/// Handles are cheap to create and hold nothing but the path; obtain them
/// from the accessors on [`ApiClient`] such as [`ApiClient::users`].
#[derive(Debug)]
pub struct Collection<'a, R> {
    client: &'a ApiClient,
    path: Vec<String>,
    /// Set for collections nested below a tenant. Checked on every request.
    tenant_id: Option<String>,
    resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> Collection<'a, R> {
    /// A collection living directly under `/v1`.
    pub(crate) fn global(client: &'a ApiClient) -> Self {
        Self::at(client, ["v1", R::COLLECTION], None)
    }

    /// A collection nested below a tenant, `/v1/tenants/{tenant_id}`.
    ///
    /// An unusable tenant id is reported by the first request made.
    pub(crate) fn tenant_scoped(client: &'a ApiClient, tenant_id: &str) -> Self {
        Self::at(
            client,
            ["v1", "tenants", tenant_id, R::COLLECTION],
            Some(tenant_id.to_string()),
        )
    }

    fn at<const N: usize>(
        client: &'a ApiClient,
        path: [&str; N],
        tenant_id: Option<String>,
    ) -> Self {
        Self {
            client,
            path: path.iter().map(|segment| segment.to_string()).collect(),
            tenant_id,
            resource: PhantomData,
        }
    }

    /// The collection's path segments, relative to the base URL.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    fn collection_url(&self) -> Result<Url> {
        if let Some(tenant_id) = &self.tenant_id {
            check_id(Tenant::KIND, tenant_id)?;
        }
        self.client.url(&self.path)
    }

    fn item_url(&self, id: &str) -> Result<Url> {
        check_id(R::KIND, id)?;
        if let Some(tenant_id) = &self.tenant_id {
            check_id(Tenant::KIND, tenant_id)?;
        }
        self.client.url(self.path.iter().map(String::as_str).chain([id]))
    }

    /// Fetches the first page of this collection, metadata included.
    #[instrument(skip_all, fields(resource = R::COLLECTION))]
    pub async fn list_page(&self) -> Result<Page<R>> {
        let body = self
            .client
            .execute(Method::GET, self.collection_url()?, None)
            .await?;
        Page::from_slice(&body).map_err(ApiError::Decode)
    }

    /// Fetches the records on the first page of this collection, in the
    /// order the server listed them.
    pub async fn list(&self) -> Result<Vec<R>> {
        Ok(self.list_page().await?.records)
    }

    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn get(&self, id: &str) -> Result<R> {
        self.client
            .call(Method::GET, self.item_url(id)?, NO_BODY)
            .await
    }

    /// Creates a record, returning the server's copy with its assigned id.
    #[instrument(skip_all, fields(resource = R::COLLECTION))]
    pub async fn create(&self, record: &R) -> Result<R> {
        self.client
            .call(Method::POST, self.collection_url()?, Some(record))
            .await
    }

    /// Replaces the record addressed by its own id.
    ///
    /// Records without an id are rejected before anything is sent.
    #[instrument(skip_all, fields(resource = R::COLLECTION, id = record.id()))]
    pub async fn update(&self, record: &R) -> Result<R> {
        let id = record.id().unwrap_or_default();
        self.client
            .call(Method::PUT, self.item_url(id)?, Some(record))
            .await
    }

    /// Deletes the record with the given id. Any response body is discarded.
    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .execute(Method::DELETE, self.item_url(id)?, None)
            .await?;
        Ok(())
    }

    /// Finds the first record matching `matches`, then fetches its full
    /// detail by id.
    ///
    /// Only the first page of the collection is scanned. Records past it
    /// will never be found, and the lookup fails with
    /// [`ApiError::NotFound`] instead.
    pub async fn find_by<P>(&self, matches: P) -> Result<R>
    where
        P: Fn(&R) -> bool,
    {
        scan_then_fetch(R::KIND, self.list(), matches, |found| async move {
            self.get(found.id().unwrap_or_default()).await
        })
        .await
    }

    /// Deletes the first record matching `matches`.
    ///
    /// As with [`Collection::find_by`], only the first page is scanned.
    pub async fn delete_by<P>(&self, matches: P) -> Result<()>
    where
        P: Fn(&R) -> bool,
    {
        scan_then_fetch(R::KIND, self.list(), matches, |found| async move {
            self.delete(found.id().unwrap_or_default()).await
        })
        .await
    }
}

/// Ensures `id` addresses exactly one path segment.
///
/// `.` and `..` would be collapsed away, leaving the request pointed at the
/// collection (or its parent) rather than a single record.
fn check_id(resource: &'static str, id: &str) -> Result<()> {
    match id {
        "" => Err(ApiError::MissingId { resource }),
        "." | ".." => Err(ApiError::InvalidId {
            resource,
            id: id.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Emulates a lookup by a secondary attribute, which the API has no
/// endpoint for.
///
/// We await `list` for a page of records, pick the first one `matches`
/// accepts, and hand it to `then`, usually to re-fetch its detail view
/// as list entries may carry fewer fields. If nothing on the page
/// matches, `then` is never invoked and we report `resource` as not found.
///
/// Pagination is deliberately not followed: a collection larger than one
/// page can produce false negatives.
pub async fn scan_then_fetch<R, T, L, P, F, Fut>(
    resource: &'static str,
    list: L,
    matches: P,
    then: F,
) -> Result<T>
where
    L: Future<Output = Result<Vec<R>>>,
    P: Fn(&R) -> bool,
    F: FnOnce(R) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let records = list.await?;
    let scanned = records.len();
    let Some(found) = records.into_iter().find(|record| matches(record)) else {
        debug!(resource, scanned, "no record matched");
        return Err(ApiError::NotFound { resource });
    };

    then(found).await
}
