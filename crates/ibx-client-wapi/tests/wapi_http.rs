//! HTTP-level tests for the WAPI client, against a mocked appliance
//!
//! Exercises the request shapes the client emits and the three result
//! paths of every operation: found, empty, and error.

use ibx_client_wapi::{WapiConfig, WapiHttpClient};
use ibx_core::request::Secret;
use ibx_core::traits::WapiClient;
use ibx_core::Error;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WapiHttpClient {
    let config = WapiConfig {
        server: server.uri(),
        username: "admin".to_string(),
        password: Secret::new("infoblox"),
        api_version: "2.3.1".to_string(),
        dns_view: "default".to_string(),
        net_view: "default".to_string(),
        accept_invalid_certs: false,
    };
    WapiHttpClient::new(config).expect("client builds")
}

#[tokio::test]
async fn get_network_returns_the_matching_objects() {
    let server = MockServer::start().await;
    let found = json!([{
        "_ref": "network/ZG5zLm5ldHdvcmskMTAuMC4wLjAvMjQvMA:10.0.0.0/24/default",
        "network": "10.0.0.0/24",
    }]);

    Mock::given(method("GET"))
        .and(path("/wapi/v2.3.1/network"))
        .and(query_param("network", "10.0.0.0/24"))
        .and(query_param("network_view", "default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(found.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.get_network("10.0.0.0/24", None).await.unwrap();

    assert_eq!(result, Some(found));
}

#[tokio::test]
async fn empty_search_results_are_not_found_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wapi/v2.3.1/network"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.get_network("192.0.2.0/24", None).await.unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn fields_map_to_the_return_fields_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wapi/v2.3.1/network"))
        .and(query_param("_return_fields", "network,comment"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"network": "10.0.0.0/24", "comment": "lab"}])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .get_network("10.0.0.0/24", Some("network,comment"))
        .await
        .unwrap();

    assert!(result.is_some());
}

#[tokio::test]
async fn create_network_posts_the_body_and_returns_the_ref() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wapi/v2.3.1/network"))
        .and(body_json(json!({
            "network": "10.0.0.0/24",
            "network_view": "default",
            "comment": "lab segment",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!("network/ZG5z")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .create_network("10.0.0.0/24", Some("lab segment"), None)
        .await
        .unwrap();

    assert_eq!(result, Some(json!("network/ZG5z")));
}

#[tokio::test]
async fn rejected_creates_report_not_applied() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wapi/v2.3.1/network"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "Error": "AdmConDataError: None (IBDataConflictError: IB.Data.Conflict)",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.create_network("10.0.0.0/24", None, None).await.unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn delete_fixedaddress_resolves_the_ref_then_deletes_it() {
    let server = MockServer::start().await;
    let objref = "fixedaddress/ZG5zLmZpeGVkX2FkZHJlc3MkMTAuMC4wLjUuMC4u:10.0.0.5/default";

    Mock::given(method("GET"))
        .and(path("/wapi/v2.3.1/fixedaddress"))
        .and(query_param("ipv4addr", "10.0.0.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"_ref": objref}])))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/wapi/v2.3.1/{objref}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(objref)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.delete_fixedaddress("10.0.0.5").await.unwrap();

    assert_eq!(result, Some(json!(objref)));
}

#[tokio::test]
async fn deleting_a_missing_fixedaddress_reports_not_applied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wapi/v2.3.1/fixedaddress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.delete_fixedaddress("10.0.0.5").await.unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn update_network_puts_the_new_comment_on_the_resolved_ref() {
    let server = MockServer::start().await;
    let objref = "network/ZG5zLm5ldHdvcmskMTAuMC4wLjAvMjQvMA:10.0.0.0/24/default";

    Mock::given(method("GET"))
        .and(path("/wapi/v2.3.1/network"))
        .and(query_param("network", "10.0.0.0/24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"_ref": objref}])))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("/wapi/v2.3.1/{objref}")))
        .and(body_json(json!({"comment": "renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(objref)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .update_network("10.0.0.0/24", Some("renamed"))
        .await
        .unwrap();

    assert_eq!(result, Some(json!(objref)));
}

#[tokio::test]
async fn authentication_failures_surface_as_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wapi/v2.3.1/network"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_network("10.0.0.0/24", None).await.unwrap_err();

    assert!(matches!(err, Error::Authentication(_)));
    assert!(!err.to_string().contains("infoblox"), "password leaked");
}

#[tokio::test]
async fn delete_dns_records_removes_the_forward_and_reverse_pair() {
    let server = MockServer::start().await;
    let a_ref = "record:a/ZG5zLmJpbmRfYQ:web.example.com/default";
    let ptr_ref = "record:ptr/ZG5zLmJpbmRfcHRy:5.0.0.10.in-addr.arpa/default";

    Mock::given(method("GET"))
        .and(path("/wapi/v2.3.1/record:a"))
        .and(query_param("name", "web.example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"_ref": a_ref}])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wapi/v2.3.1/record:ptr"))
        .and(query_param("ptrdname", "web.example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"_ref": ptr_ref}])))
        .mount(&server)
        .await;

    for objref in [a_ref, ptr_ref] {
        Mock::given(method("DELETE"))
            .and(path(format!("/wapi/v2.3.1/{objref}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(objref)))
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let result = client.delete_dns_records("web.example.com").await.unwrap();

    assert_eq!(result, Some(json!([a_ref, ptr_ref])));
}
