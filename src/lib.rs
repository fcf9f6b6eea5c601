//! Recast is a chat-client plugin that forwards user-supplied text to the
//! OpenAI Chat Completions API and replies with a corrected/rewritten version,
//! formatted for a Telegram-style HTML message renderer.
//!
//! The crate is glue around one request/response cycle:
//! - [`openai`] — the completion client: one `POST /chat/completions` with a
//!   fixed instruction prefix and a bearer token, decoded into either the
//!   answer or the API's reported error.
//! - [`format`] — rewrites backtick code spans in the answer into `<code>`
//!   display markup.
//! - [`command`] — the `correct` command handler: argument and key checks, the
//!   loading placeholder, and error rendering, speaking to the host through
//!   the [`command::Responder`] seam.
//! - [`locales`] — the plugin's message templates in eight languages.
//! - [`config`] — the single secret-valued `api_key` option.
//!
//! # Example
//! ```no_run
//! use recast::{CorrectCommand, Lang, PluginConfig, Responder};
//!
//! struct Printer;
//!
//! impl Responder for Printer {
//!     async fn answer(&mut self, html: &str) {
//!         println!("{html}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let command = CorrectCommand::new(PluginConfig::from_env(), Lang::En);
//!     command.correct("me think this sentense has eror", &mut Printer).await;
//! }
//! ```
//!
//! Every invocation is independent: nothing is cached or persisted across
//! calls, and no invocation failure is fatal to the host.

pub mod command;
pub mod completion;
pub mod config;
pub mod format;
pub mod locales;
pub mod openai;

pub use command::{CorrectCommand, Responder};
pub use completion::{CompletionError, CompletionModel};
pub use config::PluginConfig;
pub use format::format_code_spans;
pub use locales::Lang;
