//! Integration tests for the reqwest transport against a mock HTTP server

use std::sync::Arc;

use ingest_sdk::{
    ClientConfig, Event, EventOptions, HttpTransport, IngestClient, IngestionUri, Method,
    Outcome, SdkError, SmartObject, Transport, TransportError,
};
use mockito::Matcher;
use serde_json::json;

fn config_for(server: &mockito::Server, access_token: Option<&str>) -> ClientConfig {
    let address = server.host_with_port();
    let (host, port) = address.split_once(':').expect("host:port");
    ClientConfig {
        scheme: "http".to_string(),
        host: host.to_string(),
        port: port.parse().expect("port"),
        access_token: access_token.map(str::to_string),
        ..ClientConfig::default()
    }
}

fn client_for(server: &mockito::Server, access_token: Option<&str>) -> IngestClient {
    IngestClient::from_config(&config_for(server, access_token)).expect("client")
}

#[test]
fn test_send_events_posts_json_array() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/v3/events")
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_body(Matcher::Json(json!([
            { "x_event_type": "reading", "x_object": { "x_device_id": "d1" }, "temp": 20 }
        ])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id":"e1","result":"success","message":""},
                {"id":"e2","result":"error","message":"Object for the Event doesn't exist"}]"#,
        )
        .create();

    let mut timeseries = std::collections::BTreeMap::new();
    timeseries.insert("temp".to_string(), json!(20));
    let event = Event::from_options(EventOptions {
        event_type: Some("reading".to_string()),
        device_id: Some("d1".to_string()),
        timeseries,
        ..EventOptions::default()
    })
    .unwrap();

    let client = client_for(&server, None);
    let results = client.events().send(&[event][..]).unwrap();

    mock.assert();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id(), Some("e1"));
    assert_eq!(results[0].outcome(), Outcome::Success);
    assert_eq!(results[1].outcome(), Outcome::Error);
    assert_eq!(
        results[1].message(),
        Some("Object for the Event doesn't exist")
    );
}

#[test]
fn test_bearer_token_is_sent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/v3/objects/device%201/events")
        .match_header("authorization", "Bearer token-123")
        .with_status(200)
        .with_body("[]")
        .create();

    let client = client_for(&server, Some("token-123"));
    let events = [Event::of_type("type")];
    let results = client
        .events()
        .send_for_device("device 1", &events[..])
        .unwrap();

    mock.assert();
    assert!(results.is_empty());
}

#[test]
fn test_create_object_ignores_response_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/v3/objects")
        .match_body(Matcher::Json(json!({
            "x_device_id": "device1",
            "x_object_type": "thermostat"
        })))
        .with_status(201)
        .with_body(r#"{"x_device_id":"device1"}"#)
        .create();

    let client = client_for(&server, None);
    client
        .objects()
        .create(&SmartObject::new("device1", "thermostat"))
        .unwrap();

    mock.assert();
}

#[test]
fn test_update_and_delete_verbs() {
    let mut server = mockito::Server::new();
    let put = server
        .mock("PUT", "/api/v3/objects/device1")
        .match_body(Matcher::Json(json!({ "x_object_type": "thermostat" })))
        .with_status(200)
        .create();
    let delete = server
        .mock("DELETE", "/api/v3/objects/device1")
        .with_status(200)
        .create();

    let client = client_for(&server, None);
    let update = SmartObject::from_options(ingest_sdk::SmartObjectOptions {
        object_type: Some("thermostat".to_string()),
        ..Default::default()
    })
    .unwrap();

    client.objects().update(&update, "device1").unwrap();
    client.objects().delete("device1").unwrap();

    put.assert();
    delete.assert();
}

#[test]
fn test_create_or_update_returns_results_in_response_order() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/api/v3/objects")
        .with_status(200)
        .with_body(
            r#"[{"id":"device2","result":"error","message":"Error Y"},
                {"id":"device1","result":"success","message":""}]"#,
        )
        .create();

    let client = client_for(&server, None);
    let objects = vec![
        SmartObject::new("device1", "type"),
        SmartObject::new("device2", "type"),
    ];
    let results = client
        .objects()
        .create_or_update(objects.as_slice())
        .unwrap();

    mock.assert();
    let ids: Vec<_> = results.iter().filter_map(|r| r.id()).collect();
    assert_eq!(ids, vec!["device2", "device1"]);
}

#[test]
fn test_error_status_is_remote_failure() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/api/v3/objects/missing")
        .with_status(404)
        .with_body("object not found")
        .create();

    let client = client_for(&server, None);
    let err = client.objects().delete("missing").unwrap_err();

    mock.assert();
    match err {
        SdkError::Remote(TransportError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "object not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn test_validation_failure_sends_nothing() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    let client = client_for(&server, None);
    let err = client.events().send(None).unwrap_err();

    assert_eq!(err.to_string(), "Event list cannot be null or empty.");
    mock.assert();
}

#[test]
fn test_transport_exchange_without_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/api/v3/objects/d")
        .with_status(204)
        .create();

    let transport = HttpTransport::new(&config_for(&server, None)).unwrap();
    let url = IngestionUri::parse(&format!("{}/api/v3", server.url()))
        .unwrap()
        .segments(["objects", "d"])
        .to_string();

    let response = transport.exchange(&url, Method::Delete, None).unwrap();

    mock.assert();
    assert_eq!(response.status, 204);
    assert!(response.body().is_none());
}

#[test]
fn test_malformed_batch_response_is_decode_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("PUT", "/api/v3/objects")
        .with_status(200)
        .with_body("not json")
        .create();

    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&config_for(&server, None)).unwrap());
    let base = IngestionUri::parse(&format!("{}/api/v3", server.url())).unwrap();
    let client = IngestClient::with_transport(base, transport);

    let err = client
        .objects()
        .create_or_update(&[SmartObject::new("d", "t")][..])
        .unwrap_err();
    assert!(matches!(err, SdkError::Remote(TransportError::Decode(_))));
}
