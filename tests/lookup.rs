mod common;

use cloudcenter::{ApiError, Contract};
use common::{client, AUTHORIZATION};
use serde_json::json;
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The list view of users, which carries fewer fields than their detail view.
fn user_listing() -> serde_json::Value {
    json!({
        "resource": "users",
        "size": 3,
        "pageNumber": 0,
        "totalElements": 3,
        "totalPages": 1,
        "users": [
            {"id": "1", "emailAddr": "a@example.com"},
            {"id": "2", "emailAddr": "b@example.com"},
            {"id": "3", "emailAddr": "c@example.com"}
        ]
    })
}

async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_listing()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn find_by_email_refetches_the_matching_user() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/users/2"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "2",
            "emailAddr": "b@example.com",
            "firstName": "Bea",
            "tenantId": "1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server)
        .users()
        .find_by_email("b@example.com")
        .await
        .expect("user");

    // Only the detail view knows the user's name.
    assert_eq!(user.id.as_deref(), Some("2"));
    assert_eq!(user.first_name.as_deref(), Some("Bea"));
    assert_eq!(user.tenant_id.as_deref(), Some("1"));
}

#[tokio::test]
async fn find_by_email_without_a_match_never_fetches() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/v1/users/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .expect(0)
        .mount(&server)
        .await;

    let result = client(&server).users().find_by_email("z@example.com").await;

    match result {
        Err(error @ ApiError::NotFound { resource: "user" }) => {
            assert!(error.is_not_found());
            assert_eq!(error.status(), None);
        }
        other => panic!("expected a lookup miss, got {other:?}"),
    }
}

#[tokio::test]
async fn email_matching_is_exact() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    let result = client(&server).users().find_by_email("B@example.com").await;
    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[tokio::test]
async fn delete_by_email_deletes_the_matching_user() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/v1/users/3"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .users()
        .delete_by_email("c@example.com")
        .await
        .expect("deleted");
}

#[tokio::test]
async fn delete_by_email_without_a_match_deletes_nothing() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let result = client(&server).users().delete_by_email("z@example.com").await;
    assert!(matches!(result, Err(ApiError::NotFound { resource: "user" })));
}

#[tokio::test]
async fn only_the_first_page_is_scanned() {
    let server = MockServer::start().await;

    // The server reports a second page, but we never ask for it.
    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "size": 1,
            "pageNumber": 0,
            "totalElements": 2,
            "totalPages": 2,
            "users": [{"id": "1", "emailAddr": "a@example.com"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).users().find_by_email("b@example.com").await;
    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[tokio::test]
async fn listing_failures_are_not_lookup_misses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let error = client(&server)
        .users()
        .find_by_email("a@example.com")
        .await
        .expect_err("listing fails");
    assert!(matches!(error, ApiError::Status { .. }));
}

#[tokio::test]
async fn find_by_works_for_any_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/tenants/1/contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contracts": [
                {"id": "5", "name": "monthly"},
                {"id": "6", "name": "yearly"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/tenants/1/contracts/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "6",
            "name": "yearly",
            "length": 12,
            "perms": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let contract: Contract = client
        .contracts("1")
        .find_by(|contract| contract.name.as_deref() == Some("yearly"))
        .await
        .expect("contract");

    assert_eq!(contract.length, Some(12));
}
