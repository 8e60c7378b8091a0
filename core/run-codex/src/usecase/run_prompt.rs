//! プロンプトを 1 回送って応答をパッチファイルに書くユースケース
//!
//! 流れ: API キー確認 → STDIN 読み込み → Chat Completions 1 回 → ファイル書き込み。
//! キーかプロンプトが無ければ、ネットワークにもファイルにも触れずに Precondition で終わる。

use crate::domain::settings::{MAX_TOKENS, MODEL, TEMPERATURE};
use crate::domain::{OutputPath, Prompt, SystemInstruction};
use crate::ports::outbound::PromptSource;
use common::domain::ModelName;
use common::error::Error;
use common::llm::{CompletionRequest, Message};
use common::ports::outbound::{
    EnvResolver, FileSystem, LlmProviderFactory, Log, LogLevel, LogRecord,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const LAYER: &str = "usecase";

pub struct RunPromptDeps {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub prompt_source: Arc<dyn PromptSource>,
    pub provider_factory: Arc<dyn LlmProviderFactory>,
    pub fs: Arc<dyn FileSystem>,
    pub log: Arc<dyn Log>,
}

/// 書き込み完了の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchWritten {
    pub path: PathBuf,
    pub bytes: usize,
}

impl std::fmt::Display for PatchWritten {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Patch written to {}", self.path.display())
    }
}

pub struct RunPromptUseCase {
    deps: RunPromptDeps,
}

impl RunPromptUseCase {
    pub fn new(deps: RunPromptDeps) -> Self {
        Self { deps }
    }

    /// 固定パラメータで system + user の 2 メッセージのリクエストを組み立てる
    pub fn build_request(prompt: &Prompt, system: &SystemInstruction) -> CompletionRequest {
        CompletionRequest {
            model: ModelName::new(MODEL),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            messages: vec![Message::system(&**system), Message::user(&**prompt)],
        }
    }

    /// system instruction を解決する（ファイル指定が無ければ組み込みの文面）
    fn load_system_instruction(
        &self,
        system_file: Option<&Path>,
    ) -> Result<SystemInstruction, Error> {
        match system_file {
            Some(path) => {
                let contents = self.deps.fs.read_to_string(path)?;
                SystemInstruction::from_file_contents(&contents)
            }
            None => Ok(SystemInstruction::default()),
        }
    }

    pub fn run(
        &self,
        output: &OutputPath,
        system_file: Option<&Path>,
    ) -> Result<PatchWritten, Error> {
        let api_key = self.deps.env_resolver.api_key()?;
        let raw = self.deps.prompt_source.read_prompt()?;
        let prompt = Prompt::from_input(&raw)?;
        let system = self.load_system_instruction(system_file)?;
        let request = Self::build_request(&prompt, &system);

        let provider = self.deps.provider_factory.create(api_key)?;
        self.log(
            LogRecord::new(LogLevel::Info, LAYER, "llm", "request sent")
                .field("provider", provider.name())
                .field("model", request.model.as_str())
                .field("max_tokens", request.max_tokens)
                .field("prompt_chars", prompt.chars().count()),
        );

        let completion = provider.complete(&request)?;
        let mut rec = LogRecord::new(LogLevel::Info, LAYER, "llm", "completion received")
            .field("has_content", completion.content.is_some());
        if let Some(ref model) = completion.model {
            rec = rec.field("model", model.as_str());
        }
        if let Some(usage) = completion.usage {
            rec = rec.field(
                "usage",
                serde_json::json!({
                    "prompt_tokens": usage.prompt_tokens,
                    "completion_tokens": usage.completion_tokens,
                    "total_tokens": usage.total_tokens,
                }),
            );
        }
        self.log(rec);

        let text = completion.into_text();
        self.write_patch(output, &text)?;

        let written = PatchWritten {
            path: output.to_path_buf(),
            bytes: text.len(),
        };
        self.log(
            LogRecord::new(LogLevel::Info, LAYER, "output", "patch written")
                .field("path", written.path.display().to_string())
                .field("bytes", written.bytes),
        );
        Ok(written)
    }

    /// output を丸ごと置き換える。失敗時は既存の output に触れない。
    fn write_patch(&self, output: &OutputPath, text: &str) -> Result<(), Error> {
        self.deps.fs.write(output.as_ref(), text)
    }

    fn log(&self, record: LogRecord) {
        let _ = self.deps.log.log(&record);
    }
}
