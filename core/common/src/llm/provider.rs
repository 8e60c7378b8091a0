//! LLMプロバイダのトレイトとリクエスト・レスポンス型

use crate::domain::{ApiKey, ModelName};
use crate::error::Error;
use serde::Serialize;
use std::sync::Arc;

/// メッセージの役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// メッセージ構造体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat Completions のリクエスト（model / temperature / max_tokens / messages）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: ModelName,
    pub temperature: f64,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

/// トークン使用量（レスポンスに含まれていれば）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// 1 回の完了結果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Completion {
    /// choices[0].message.content（null・欠落なら None）
    pub content: Option<String>,
    /// 実際に応答したモデル名
    pub model: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl Completion {
    /// 本文を返す。None は空文字として扱う。
    pub fn into_text(self) -> String {
        self.content.unwrap_or_default()
    }
}

/// LLMプロバイダのトレイト
///
/// 1 回のリクエストを同期で送り、結果かエラーを返す。リトライはしない。
/// HTTP 4xx は `Error::Provider`、それ以外の失敗は `Error::Http` / `Error::Json`。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    fn complete(&self, request: &CompletionRequest) -> Result<Completion, Error>;
}

/// API キーが判明してからプロバイダを生成するファクトリ
///
/// usecase はキー解決に失敗したらファクトリを呼ばないため、ネットワークにも触れない。
pub trait LlmProviderFactory: Send + Sync {
    fn create(&self, api_key: ApiKey) -> Result<Arc<dyn LlmProvider>, Error>;
}
