//! Chat gateway against a mock chat-completion deployment.

use mockito::{Matcher, Server};
use taskmaster_analytics::api::{ChatMessage, ChatReplyStatus};
use taskmaster_analytics::config::ChatConfig;
use taskmaster_analytics::services::chat::{
    ChatCompletionClient, ChatError, SPEECHLESS_REPLY, UNAVAILABLE_REPLY, UNCONFIGURED_REPLY,
};
use taskmaster_analytics::services::{AzureOpenAiClient, ChatService};

const COMPLETIONS_PATH: &str = "/openai/deployments/gpt-4o/chat/completions";

fn config_for(server: &Server) -> ChatConfig {
    ChatConfig {
        endpoint: Some(server.url()),
        api_key: Some("test-key".to_string()),
        timeout_secs: 5,
        ..Default::default()
    }
}

fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_answer_is_relayed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::UrlEncoded(
            "api-version".into(),
            "2024-08-01-preview".into(),
        ))
        .match_header("api-key", "test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({"max_tokens": 1000})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Josh Widdicombe. Next question."))
        .create_async()
        .await;

    let service = ChatService::from_config(&config_for(&server));
    assert!(service.is_configured());

    let history = vec![ChatMessage::user("Hello"), ChatMessage::assistant("Speak.")];
    let reply = service
        .chat("Who won series 1?", &history, "TASKMASTER UK DATA SUMMARY")
        .await;

    mock.assert_async().await;
    assert_eq!(reply.status, ChatReplyStatus::Answered);
    assert_eq!(reply.response, "Josh Widdicombe. Next question.");
}

#[tokio::test]
async fn test_server_error_becomes_unavailable() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal failure")
        .create_async()
        .await;

    let reply = ChatService::from_config(&config_for(&server))
        .chat("Who won series 1?", &[], "digest")
        .await;

    mock.assert_async().await;
    assert_eq!(reply.status, ChatReplyStatus::Unavailable);
    assert_eq!(reply.response, UNAVAILABLE_REPLY);
}

#[tokio::test]
async fn test_upstream_status_is_surfaced_by_the_client() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("slow down")
        .create_async()
        .await;

    let client = AzureOpenAiClient::from_config(&config_for(&server)).unwrap();
    let err = client
        .complete(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    match err {
        ChatError::Upstream { status, body } => {
            assert_eq!(status.as_u16(), 429);
            assert_eq!(body, "slow down");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_choices_leave_the_taskmaster_speechless() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let reply = ChatService::from_config(&config_for(&server))
        .chat("Anything?", &[], "digest")
        .await;

    assert_eq!(reply.status, ChatReplyStatus::Answered);
    assert_eq!(reply.response, SPEECHLESS_REPLY);
}

#[tokio::test]
async fn test_undecodable_body_becomes_unavailable() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let reply = ChatService::from_config(&config_for(&server))
        .chat("Anything?", &[], "digest")
        .await;

    assert_eq!(reply.status, ChatReplyStatus::Unavailable);
}

#[tokio::test]
async fn test_unconfigured_gateway_answers_in_character() {
    let service = ChatService::from_config(&ChatConfig::default());
    assert!(!service.is_configured());

    let reply = service.chat("Who won series 1?", &[], "digest").await;
    assert_eq!(reply.status, ChatReplyStatus::Unconfigured);
    assert_eq!(reply.response, UNCONFIGURED_REPLY);
}
