//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイントを指定可能。1 回のブロッキング呼び出しのみ（ストリーミング・リトライなし）。

use crate::domain::ApiKey;
use crate::error::Error;
use crate::llm::provider::{
    Completion, CompletionRequest, LlmProvider, LlmProviderFactory, TokenUsage,
};
use crate::ports::outbound::env_resolver::{ORG_ID_ENV, PROJECT_ID_ENV};
use crate::ports::outbound::EnvResolver;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// 公式 SDK と同じ既定タイムアウト（10 分）
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: ApiKey,
    organization: Option<String>,
    project: Option<String>,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `api_key` - Authorization: Bearer に載せるキー
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL、末尾の / は除く）
    pub fn new(api_key: ApiKey, base_url: Option<String>) -> Result<Self, Error> {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url,
            api_key,
            organization: None,
            project: None,
        })
    }

    /// OpenAI-Organization / OpenAI-Project ヘッダを付ける
    pub fn with_scope(mut self, organization: Option<String>, project: Option<String>) -> Self {
        self.organization = organization;
        self.project = project;
        self
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// リクエストボディ（JSON 文字列）を生成
    pub fn make_request_payload(request: &CompletionRequest) -> Result<String, Error> {
        serde_json::to_string(request)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))
    }
}

/// 失敗レスポンスをエラーに分類する
///
/// 4xx はプロバイダがリクエストを拒否したもの（Provider）、それ以外は Http。
/// 詳細は `error.message` があればそれを、なければ本文をそのまま使う。
fn classify_error_response(status: u16, response_text: &str) -> Error {
    let detail = serde_json::from_str::<Value>(response_text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| response_text.trim().to_string());
    if (400..500).contains(&status) {
        Error::provider(status, detail)
    } else {
        Error::http(format!("Chat completions error: HTTP {}: {}", status, detail))
    }
}

/// 成功レスポンスから choices[0] の本文・モデル名・使用量を取り出す
fn parse_completion(response_text: &str) -> Result<Completion, Error> {
    let v: Value = serde_json::from_str(response_text)
        .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

    let choice = v["choices"]
        .get(0)
        .ok_or_else(|| Error::json("Response contained no choices"))?;

    let content = choice["message"]["content"].as_str().map(|s| s.to_string());
    let model = v["model"].as_str().map(|s| s.to_string());
    let usage = v.get("usage").filter(|u| u.is_object()).map(|u| TokenUsage {
        prompt_tokens: u["prompt_tokens"].as_u64().unwrap_or(0),
        completion_tokens: u["completion_tokens"].as_u64().unwrap_or(0),
        total_tokens: u["total_tokens"].as_u64().unwrap_or(0),
    });

    Ok(Completion {
        content,
        model,
        usage,
    })
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn complete(&self, request: &CompletionRequest) -> Result<Completion, Error> {
        let body = Self::make_request_payload(request)?;

        let mut builder = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .bearer_auth(self.api_key.expose())
            .body(body);

        if let Some(ref org) = self.organization {
            builder = builder.header("OpenAI-Organization", org);
        }
        if let Some(ref project) = self.project {
            builder = builder.header("OpenAI-Project", project);
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(classify_error_response(status.as_u16(), &response_text));
        }

        parse_completion(&response_text)
    }
}

/// 環境変数（OPENAI_BASE_URL / OPENAI_ORG_ID / OPENAI_PROJECT_ID）を反映してプロバイダを作るファクトリ
pub struct OpenAiCompatProviderFactory {
    env_resolver: Arc<dyn EnvResolver>,
}

impl OpenAiCompatProviderFactory {
    pub fn new(env_resolver: Arc<dyn EnvResolver>) -> Self {
        Self { env_resolver }
    }

    fn build(&self, api_key: ApiKey) -> Result<OpenAiCompatProvider, Error> {
        let provider = OpenAiCompatProvider::new(api_key, self.env_resolver.base_url())?;
        Ok(provider.with_scope(
            self.env_resolver.var(ORG_ID_ENV),
            self.env_resolver.var(PROJECT_ID_ENV),
        ))
    }
}

impl LlmProviderFactory for OpenAiCompatProviderFactory {
    fn create(&self, api_key: ApiKey) -> Result<Arc<dyn LlmProvider>, Error> {
        Ok(Arc::new(self.build(api_key)?))
    }
}
