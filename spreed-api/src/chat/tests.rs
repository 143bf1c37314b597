//! Tests for the chat bindings against a mock OCS server

use crate::auth::Credentials;
use crate::chat::{ChatApi, MessageFilter, SendMessageParams};
use crate::config::TalkConfig;
use crate::http::ReqwestClient;
use crate::rich_object::RichObject;
use serde_json::json;
use spreed_core::Error;
use std::sync::Arc;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

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

fn message(id: i64, text: &str) -> serde_json::Value {
    json!({
        "id": id,
        "token": "23pw7aud",
        "actorType": "users",
        "actorId": "alice",
        "actorDisplayName": "Alice A.",
        "timestamp": 1697640000 + id,
        "message": text,
        "messageType": "comment",
        "systemMessage": ""
    })
}

fn api(server: &MockServer) -> ChatApi {
    let config = TalkConfig::new(server.uri(), Credentials::password("alice", "secret")).unwrap();
    ChatApi::new(config, Arc::new(ReqwestClient::new().unwrap()))
}

#[tokio::test]
async fn test_send_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .and(body_json(json!({"message": "hello", "silent": false})))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(message(589, "hello"))))
        .expect(1)
        .mount(&server)
        .await;

    let sent = api(&server)
        .send("23pw7aud", &SendMessageParams::new("hello"))
        .await
        .unwrap();
    assert_eq!(sent.id, 589);
    assert_eq!(sent.message, "hello");
    assert_eq!(sent.actor_id, "alice");
}

#[tokio::test]
async fn test_send_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .and(body_partial_json(json!({"message": "and you", "replyTo": 589})))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(message(590, "and you"))))
        .mount(&server)
        .await;

    let sent = api(&server)
        .send("23pw7aud", &SendMessageParams::new("and you").with_reply_to(589))
        .await
        .unwrap();
    assert_eq!(sent.id, 590);
}

#[tokio::test]
async fn test_send_empty_message_is_local_error() {
    let server = MockServer::start().await;
    // No mock mounted: an empty message must never reach the wire.
    assert!(matches!(
        api(&server).send("23pw7aud", &SendMessageParams::new("")).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn test_send_to_unknown_room() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/nope"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(failure(404, "Conversation not found")),
        )
        .mount(&server)
        .await;

    assert!(matches!(
        api(&server).send("nope", &SendMessageParams::new("hi")).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_send_rejected_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .respond_with(ResponseTemplate::new(400).set_body_json(failure(400, "Reply not allowed")))
        .mount(&server)
        .await;

    assert!(matches!(
        api(&server)
            .send("23pw7aud", &SendMessageParams::new("x").with_reply_to(1))
            .await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn test_history_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .and(query_param("lookIntoFuture", "0"))
        .and(query_param("limit", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([message(588, "hi"), message(589, "hello")])))
                .insert_header("X-Chat-Last-Given", "588")
                .insert_header("X-Chat-Last-Common-Read", "587"),
        )
        .mount(&server)
        .await;

    let page = api(&server)
        .history("23pw7aud", &MessageFilter::history())
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.messages[0].id, 588);
    assert_eq!(page.last_given, Some(588));
    assert_eq!(page.last_common_read, Some(587));
}

#[tokio::test]
async fn test_history_not_modified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .and(query_param("lookIntoFuture", "1"))
        .and(query_param("lastKnownMessageId", "589"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let page = api(&server)
        .history("23pw7aud", &MessageFilter::updates(589))
        .await
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.last_given, None);
}

#[tokio::test]
async fn test_share_rich_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud/share"))
        .and(body_partial_json(json!({"objectType": "file", "objectId": "42"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(envelope(message(591, "{object}"))),
        )
        .mount(&server)
        .await;

    let sent = api(&server)
        .share_rich_object("23pw7aud", &RichObject::file("42", "report.pdf"), None)
        .await
        .unwrap();
    assert_eq!(sent.id, 591);
}

#[tokio::test]
async fn test_delete_message() {
    let server = MockServer::start().await;
    let deleted = json!({
        "id": 600,
        "token": "23pw7aud",
        "message": "Message deleted by you",
        "systemMessage": "message_deleted",
        "messageType": "system"
    });
    Mock::given(method("DELETE"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud/589"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(deleted)))
        .mount(&server)
        .await;

    let replacement = api(&server).delete_message("23pw7aud", 589).await.unwrap();
    assert!(replacement.is_system());
}

#[tokio::test]
async fn test_clear_history() {
    let server = MockServer::start().await;
    let cleared = json!({
        "id": 601,
        "token": "23pw7aud",
        "message": "You cleared the history of the conversation",
        "systemMessage": "history_cleared",
        "messageType": "system"
    });
    Mock::given(method("DELETE"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(cleared)))
        .mount(&server)
        .await;

    let notice = api(&server).clear_history("23pw7aud").await.unwrap();
    assert_eq!(notice.system_message, "history_cleared");
}

#[tokio::test]
async fn test_mark_read_and_unread() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud/read"))
        .and(body_json(json!({"lastReadMessage": 589})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud/read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let chat = api(&server);
    chat.mark_read("23pw7aud", Some(589)).await.unwrap();
    chat.mark_unread("23pw7aud").await.unwrap();
}

#[tokio::test]
async fn test_history_precondition_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/apps/spreed/api/v1/chat/23pw7aud"))
        .respond_with(ResponseTemplate::new(412).set_body_json(failure(412, "Lobby is active")))
        .mount(&server)
        .await;

    assert!(matches!(
        api(&server).history("23pw7aud", &MessageFilter::history()).await,
        Err(Error::PreconditionFailed(_))
    ));
}
