//! テスト用のポート実装（環境変数マップ・固定プロンプト・記録するプロバイダ・収集ログ）

use crate::ports::outbound::PromptSource;
use common::domain::ApiKey;
use common::error::Error;
use common::llm::{Completion, CompletionRequest, LlmProvider, LlmProviderFactory};
use common::ports::outbound::{EnvResolver, Log, LogRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// マップから引く EnvResolver（空文字は未設定扱い）
pub struct MapEnvResolver(HashMap<String, String>);

impl MapEnvResolver {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl EnvResolver for MapEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        self.0.get(name).filter(|s| !s.is_empty()).cloned()
    }
}

/// 固定文字列を返す PromptSource（読まれた回数を数える）
pub struct FixedPromptSource {
    text: String,
    pub reads: AtomicUsize,
}

impl FixedPromptSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            reads: AtomicUsize::new(0),
        }
    }
}

impl PromptSource for FixedPromptSource {
    fn read_prompt(&self) -> Result<String, Error> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }
}

/// 呼び出しを記録し、決めておいた結果を返すプロバイダのファクトリ
pub struct StubProviderFactory {
    response: Result<Completion, Error>,
    pub created: AtomicUsize,
    pub calls: Arc<AtomicUsize>,
    pub keys: Mutex<Vec<String>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl StubProviderFactory {
    pub fn returning(response: Result<Completion, Error>) -> Arc<Self> {
        Arc::new(Self {
            response,
            created: AtomicUsize::new(0),
            calls: Arc::new(AtomicUsize::new(0)),
            keys: Mutex::new(Vec::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::returning(Ok(Completion {
            content: Some(text.to_string()),
            ..Default::default()
        }))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

struct StubProvider {
    response: Result<Completion, Error>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl LlmProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn complete(&self, request: &CompletionRequest) -> Result<Completion, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}

impl LlmProviderFactory for StubProviderFactory {
    fn create(&self, api_key: ApiKey) -> Result<Arc<dyn LlmProvider>, Error> {
        self.created.fetch_add(1, Ordering::SeqCst);
        self.keys.lock().unwrap().push(api_key.expose().to_string());
        Ok(Arc::new(StubProvider {
            response: self.response.clone(),
            calls: Arc::clone(&self.calls),
            requests: Arc::clone(&self.requests),
        }))
    }
}

/// レコードを JSON 文字列で溜める Log
#[derive(Default)]
pub struct CollectLog(pub Mutex<Vec<String>>);

impl CollectLog {
    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines()
            .iter()
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).unwrap();
                v["message"].as_str().unwrap_or_default().to_string()
            })
            .collect()
    }
}

impl Log for CollectLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.0
            .lock()
            .unwrap()
            .push(serde_json::to_string(record).unwrap());
        Ok(())
    }
}
