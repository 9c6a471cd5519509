//! A client for the CloudCenter management API.
//!
//! Tenants, users, contracts, bundles, plans and activation profiles can be
//! listed, fetched, created, updated and deleted through a [`Collection`]
//! handle obtained from an [`ApiClient`]:
//!
//! ```no_run
//! use cloudcenter::{ApiClient, User};
//!
//! # async fn example() -> cloudcenter::Result<()> {
//! let client = ApiClient::new("https://cloudcenter.example.com", "admin", "secret")?;
//!
//! let created = client
//!     .users()
//!     .create(&User {
//!         email_addr: Some("someone@example.com".to_string()),
//!         password: Some("hunter2".to_string()),
//!         tenant_id: Some("1".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let found = client.users().find_by_email("someone@example.com").await?;
//! assert_eq!(created.id, found.id);
//! # Ok(())
//! # }
//! ```
//!
//! Lookups by anything other than id ([`Collection::find_by`] and friends)
//! only scan the first page the API returns for a collection. On
//! collections spanning multiple pages they may report
//! [`ApiError::NotFound`] for records that do exist.
//!
//! The crate emits `tracing` spans and events but never installs a
//! subscriber.

mod api;
mod resources;

pub use api::{ApiClient, ApiClientBuilder, ApiError, Credentials, Result};
pub use resources::{
    scan_then_fetch, ActivateRegion, ActivationProfile, Bundle, Collection, Contract, Page, Plan,
    Preference, Resource, Tenant, User,
};
