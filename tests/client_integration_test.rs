//! Integration tests for the high-level Talk client
//!
//! Every test drives `TalkClient` end-to-end against a wiremock server
//! speaking the OCS envelope.

use serde_json::json;
use spreed::api::SendMessageParams;
use spreed::{Credentials, Error, TalkClient};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASIC_ALICE: &str = "Basic YWxpY2U6c2VjcmV0";

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({
        "ocs": {
            "meta": {"status": "ok", "statuscode": 200, "message": "OK"},
            "data": data
        }
    })
}

fn failure(statuscode: u16, message: &str) -> serde_json::Value {
    json!({
        "ocs": {
            "meta": {"status": "failure", "statuscode": statuscode, "message": message},
            "data": []
        }
    })
}

fn capabilities(features: &[&str]) -> serde_json::Value {
    envelope(json!({
        "capabilities": {
            "spreed": {"features": features}
        }
    }))
}

fn room(token: &str, name: &str) -> serde_json::Value {
    json!({
        "token": token,
        "type": 3,
        "name": name,
        "displayName": name,
        "lastActivity": 1697640000
    })
}

fn message(id: i64, token: &str, text: &str) -> serde_json::Value {
    json!({
        "id": id,
        "token": token,
        "actorType": "users",
        "actorId": "alice",
        "actorDisplayName": "Alice A.",
        "timestamp": 1697640000 + id,
        "message": text,
        "messageType": "comment",
        "systemMessage": ""
    })
}

/// Mount the capabilities endpoint with the baseline feature set
async fn mount_capabilities(server: &MockServer, features: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/cloud/capabilities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(capabilities(features)))
        .mount(server)
        .await;
}

async fn connect(server: &MockServer) -> TalkClient {
    mount_capabilities(server, &["conversation-v4", "chat-v2", "favorites"]).await;
    TalkClient::connect(server.uri(), "alice", "secret")
        .await
        .unwrap()
}

#[tokio::test]
async fn test_connect_caches_capabilities_in_server_order() {
    let server = MockServer::start().await;
    mount_capabilities(
        &server,
        &["audio", "video", "chat-v2", "conversation-v4", "favorites"],
    )
    .await;

    let talk = TalkClient::connect(server.uri(), "alice", "secret")
        .await
        .unwrap();

    assert_eq!(
        talk.capabilities().features,
        vec!["audio", "video", "chat-v2", "conversation-v4", "favorites"]
    );
    assert!(talk.capabilities().supports("favorites"));
}

#[tokio::test]
async fn test_connect_requires_api_versions() {
    let server = MockServer::start().await;
    mount_capabilities(&server, &["chat-v2"]).await;

    match TalkClient::connect(server.uri(), "alice", "secret").await {
        Err(Error::MissingCapability(name)) => assert_eq!(name, "conversation-v4"),
        other => panic!("expected MissingCapability, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connect_with_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/cloud/capabilities"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(failure(401, "Current user is not logged in")),
        )
        .mount(&server)
        .await;

    assert!(matches!(
        TalkClient::connect(server.uri(), "alice", "wrong").await,
        Err(Error::Auth { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_connect_without_credentials() {
    assert!(matches!(
        TalkClient::builder("https://chat.example.com").connect().await,
        Err(Error::Configuration(_))
    ));
}

#[tokio::test]
async fn test_listed_conversation_can_be_fetched_by_token() {
    let server = MockServer::start().await;
    let talk = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v4/room"))
        .and(header("Authorization", BASIC_ALICE))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            room("23pw7aud", "Work Chat"),
            room("9cx4zumv", "Lunch")
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v4/room/23pw7aud"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(room("23pw7aud", "Work Chat"))),
        )
        .mount(&server)
        .await;

    let rooms = talk.conversation_list().await.unwrap();
    assert_eq!(rooms.len(), 2);

    let fetched = talk.conversation_get(&rooms[0].token).await.unwrap();
    assert_eq!(fetched.token, rooms[0].token);
    assert_eq!(fetched.display_name, "Work Chat");
}

#[tokio::test]
async fn test_send_then_list_round_trip() {
    let server = MockServer::start().await;
    let talk = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .and(body_json(json!({"message": "hello", "silent": false})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(envelope(message(589, "23pw7aud", "hello"))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([
                    message(588, "23pw7aud", "earlier"),
                    message(589, "23pw7aud", "hello")
                ])))
                .insert_header("X-Chat-Last-Given", "588"),
        )
        .mount(&server)
        .await;

    let sent = talk.send("23pw7aud", "hello").await.unwrap();
    assert_eq!(sent.message, "hello");
    assert!(sent.id > 0);

    let page = talk.message_list("23pw7aud").await.unwrap();
    assert!(page
        .messages
        .iter()
        .any(|m| m.id == sent.id && m.message == "hello"));
    assert_eq!(page.last_given, Some(588));
}

#[tokio::test]
async fn test_invalid_credentials_never_yield_empty_results() {
    let server = MockServer::start().await;
    let talk = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v4/room"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(failure(401, "Current user is not logged in")),
        )
        .mount(&server)
        .await;

    match talk.conversation_list().await {
        Err(Error::Auth { status: 401, message }) => {
            assert_eq!(message, "Current user is not logged in");
        }
        other => panic!("expected Auth, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_token_yields_not_found() {
    let server = MockServer::start().await;
    let talk = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v4/room/does-not-exist"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(failure(404, "Conversation not found")),
        )
        .mount(&server)
        .await;

    assert!(matches!(
        talk.conversation_get("does-not-exist").await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_server_failure_surfaces_as_server_error() {
    let server = MockServer::start().await;
    let talk = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v4/room"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    assert!(matches!(
        talk.conversation_list().await,
        Err(Error::Server { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_non_json_body_surfaces_as_protocol_error() {
    let server = MockServer::start().await;
    let talk = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v4/room"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login page</html>"))
        .mount(&server)
        .await;

    assert!(matches!(
        talk.conversation_list().await,
        Err(Error::Protocol { .. })
    ));
}

#[tokio::test]
async fn test_capability_gated_call_makes_no_request() {
    let server = MockServer::start().await;
    // The baseline feature set has no clear-history.
    let talk = connect(&server).await;

    // No chat mock mounted: the call must fail before any HTTP traffic.
    match talk.clear_history("23pw7aud").await {
        Err(Error::MissingCapability(name)) => assert_eq!(name, "clear-history"),
        other => panic!("expected MissingCapability, got {:?}", other),
    }
}

#[tokio::test]
async fn test_favorite_passes_capability_gate() {
    let server = MockServer::start().await;
    let talk = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v4/room/23pw7aud/favorite"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    talk.conversation_favorite("23pw7aud").await.unwrap();
}

#[tokio::test]
async fn test_bearer_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/cloud/capabilities"))
        .and(header("Authorization", "Bearer app-token-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(capabilities(&["conversation-v4", "chat-v2"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let talk = TalkClient::builder(server.uri())
        .credentials(Credentials::bearer("app-token-1"))
        .connect()
        .await
        .unwrap();
    assert!(talk.capabilities().supports("chat-v2"));
}

#[tokio::test]
async fn test_example_scenario() {
    // A user alice on a Talk server with one room "Work Chat".
    let server = MockServer::start().await;
    let talk = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v4/room"))
        .and(query_param("noStatusUpdate", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([room("23pw7aud", "Work Chat")]))),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(envelope(message(590, "23pw7aud", "hello"))),
        )
        .mount(&server)
        .await;

    let rooms = talk.conversation_list().await.unwrap();
    assert_eq!(rooms[0].token, "23pw7aud");
    assert_eq!(rooms[0].display_name, "Work Chat");

    let sent = talk.send("23pw7aud", "hello").await.unwrap();
    assert!(!sent.id.to_string().is_empty());
    assert_eq!(sent.token, "23pw7aud");
}

#[tokio::test]
async fn test_send_with_reference_id_round_trip() {
    let server = MockServer::start().await;
    let talk = connect(&server).await;

    let params = SendMessageParams::new("tracked").with_reference_id("ref-abc");
    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .and(body_json(json!({
            "message": "tracked",
            "referenceId": "ref-abc",
            "silent": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({
            "id": 591,
            "token": "23pw7aud",
            "message": "tracked",
            "referenceId": "ref-abc"
        }))))
        .mount(&server)
        .await;

    let sent = talk.send_with("23pw7aud", &params).await.unwrap();
    assert_eq!(sent.reference_id.as_deref(), Some("ref-abc"));
}
