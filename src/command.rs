//! The `correct` command: forwards user text to the completion model and
//! replies with the rewritten, code-span-formatted result.
//!
//! The host framework owns dispatch and message delivery; it plugs in through
//! [`Responder`]. Every outcome of an invocation, errors included, becomes a
//! user-visible message — nothing here can take the host process down.

use crate::completion::{CompletionError, CompletionModel};
use crate::config::PluginConfig;
use crate::format::format_code_spans;
use crate::locales::Lang;
use crate::openai::{self, GPT_35_TURBO};

/// Display name the plugin registers under.
pub const PLUGIN_NAME: &str = "ChatGPT";

/// Command keyword, as in `.correct <text>`.
pub const COMMAND_NAME: &str = "correct";

/// The host's message-edit capability: each `answer` call replaces the
/// command's reply message with new HTML.
pub trait Responder: Send {
    fn answer(&mut self, html: &str) -> impl std::future::Future<Output = ()> + Send;
}

pub struct CorrectCommand<M> {
    config: PluginConfig,
    model: M,
    lang: Lang,
}

impl CorrectCommand<openai::CompletionModel> {
    /// Wire the command to the OpenAI `gpt-3.5-turbo` completion model.
    ///
    /// # Panics
    /// - If the reqwest client cannot be built (if the TLS backend cannot be initialized).
    pub fn new(config: PluginConfig, lang: Lang) -> Self {
        let model = openai::Client::new(&config.api_key).completion_model(GPT_35_TURBO);
        Self::with_model(config, model, lang)
    }
}

impl<M: CompletionModel> CorrectCommand<M> {
    /// Wire the command to an arbitrary completion model.
    pub fn with_model(config: PluginConfig, model: M, lang: Lang) -> Self {
        Self {
            config,
            model,
            lang,
        }
    }

    /// Handle one `.correct <args>` invocation.
    ///
    /// The loading placeholder is sent through `responder` before the network
    /// call is awaited, so the host shows progress while the request is in
    /// flight. An unconfigured key or empty `args` short-circuit without
    /// touching the network.
    pub async fn correct<R: Responder>(&self, args: &str, responder: &mut R) {
        let strings = self.lang.strings();

        if !self.config.has_api_key() {
            responder.answer(strings.no_api_key).await;
            return;
        }

        if args.trim().is_empty() {
            responder.answer(strings.no_args).await;
            return;
        }

        responder.answer(&strings.render_answer(strings.loading)).await;

        let reply = match self.model.complete(args).await {
            Ok(answer) => strings.render_answer(&format_code_spans(&answer)),
            Err(CompletionError::ProviderError(message)) => format!("🚫 {message}"),
            Err(err) => {
                tracing::warn!(target: "recast", "correct command failed: {err}");
                strings.request_failed.to_string()
            }
        };

        responder.answer(&reply).await;
    }
}
