use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use recast::command::CorrectCommand;
use recast::completion::{CompletionError, CompletionModel as _};
use recast::config::PluginConfig;
use recast::locales::Lang;
use recast::openai::{Client, GPT_35_TURBO, REWRITE_PREFIX};
use recast::Responder;

#[derive(Default)]
struct Transcript {
    messages: Vec<String>,
}

impl Responder for Transcript {
    async fn answer(&mut self, html: &str) {
        self.messages.push(html.to_string());
    }
}

fn model_for(server: &MockServer, api_key: &str) -> recast::openai::CompletionModel {
    Client::builder(api_key)
        .base_url(&server.base_url())
        .build()
        .expect("client should build")
        .completion_model(GPT_35_TURBO)
}

#[tokio::test]
async fn request_body_is_the_prefixed_prompt_verbatim() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .header("Authorization", "Bearer TEST")
            .json_body(json!({
                "model": "gpt-3.5-turbo",
                "messages": [{
                    "role": "user",
                    "content": format!("{REWRITE_PREFIX}me think this has eror"),
                }],
            }));
        then.status(200).json_body(json!({
            "choices": [{"message": {"role": "assistant", "content": "I think this has an error"}}],
        }));
    });

    let answer = model_for(&server, "TEST")
        .complete("me think this has eror")
        .await
        .expect("completion should succeed");

    mock.assert();
    assert_eq!(answer, "I think this has an error");
}

#[tokio::test]
async fn error_object_surfaces_as_provider_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(401)
            .json_body(json!({"error": {"message": "X", "type": "invalid_request_error"}}));
    });

    let err = model_for(&server, "BAD")
        .complete("anything")
        .await
        .expect_err("error body must not produce an answer");

    match err {
        CompletionError::ProviderError(message) => assert_eq!(message, "X"),
        other => panic!("expected ProviderError, got {other:?}"),
    }
}

#[tokio::test]
async fn first_choice_content_is_returned_exactly() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Y"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ],
        }));
    });

    let answer = model_for(&server, "TEST")
        .complete("anything")
        .await
        .expect("completion should succeed");

    assert_eq!(answer, "Y");
}

#[tokio::test]
async fn non_json_body_is_a_json_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(502).body("Bad Gateway");
    });

    let err = model_for(&server, "TEST")
        .complete("anything")
        .await
        .expect_err("non-JSON body must fail");

    assert!(matches!(err, CompletionError::JsonError(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_choices_is_a_response_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(json!({"choices": []}));
    });

    let err = model_for(&server, "TEST")
        .complete("anything")
        .await
        .expect_err("empty choices must fail");

    assert!(
        matches!(err, CompletionError::ResponseError(_)),
        "got {err:?}"
    );
}

#[tokio::test]
async fn empty_api_key_never_touches_the_transport() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({
            "choices": [{"message": {"role": "assistant", "content": "never sent"}}],
        }));
    });

    let command = CorrectCommand::with_model(
        PluginConfig::default(),
        model_for(&server, ""),
        Lang::En,
    );
    let mut transcript = Transcript::default();

    command.correct("some text", &mut transcript).await;

    assert_eq!(mock.hits(), 0);
    assert_eq!(transcript.messages, vec![Lang::En.strings().no_api_key]);
}

#[tokio::test]
async fn end_to_end_loading_then_formatted_answer() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("recast=debug")
        .try_init();

    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(json!({
            "choices": [{"message": {
                "role": "assistant",
                "content": "Use ```let x = 1;``` or `cargo fmt`",
            }}],
        }));
    });

    let command = CorrectCommand::with_model(
        PluginConfig::new("TEST"),
        model_for(&server, "TEST"),
        Lang::En,
    );
    let mut transcript = Transcript::default();

    command.correct("use let x = 1 or cargo fmt", &mut transcript).await;

    assert_eq!(
        transcript.messages,
        vec![
            "<code>Loading...</code>".to_string(),
            "Use <code>let x = 1;</code> or <code>cargo fmt</code>".to_string(),
        ]
    );
}
