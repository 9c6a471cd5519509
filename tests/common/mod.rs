#![allow(dead_code)]

use cloudcenter::ApiClient;
use serde_json::Value;
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

/// `admin:secret`, as a basic authentication header.
pub const AUTHORIZATION: &str = "Basic YWRtaW46c2VjcmV0";

pub fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), "admin", "secret").expect("client")
}

/// Mimics a create or update: the request body is echoed back, with an
/// `id` assigned if it didn't already carry one.
pub struct EchoWithId(pub &'static str);

impl Respond for EchoWithId {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body: Value = serde_json::from_slice(&request.body).expect("JSON request body");
        if body.get("id").is_none() {
            body["id"] = Value::from(self.0);
        }
        ResponseTemplate::new(201).set_body_json(body)
    }
}
