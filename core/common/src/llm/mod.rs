//! LLMプロバイダの実装
//!
//! リクエスト・レスポンス型とプロバイダ trait、OpenAI 互換の HTTP 実装を提供します。

pub mod openai_compat;
pub mod provider;

pub use openai_compat::{OpenAiCompatProvider, OpenAiCompatProviderFactory};
pub use provider::{
    Completion, CompletionRequest, LlmProvider, LlmProviderFactory, Message, Role, TokenUsage,
};
