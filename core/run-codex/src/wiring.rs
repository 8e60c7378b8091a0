//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    FanoutLog, FileJsonLog, FileSystem, NoopLog, StderrLog, StdEnvResolver, StdFileSystem,
};
use common::llm::OpenAiCompatProviderFactory;
use common::ports::outbound::{EnvResolver, Log};

use crate::adapter::StdinPromptSource;
use crate::usecase::{RunPromptDeps, RunPromptUseCase};

/// JSONL ログの出力先を指定する環境変数（未設定ならファイルには書かない）
pub const LOG_PATH_ENV: &str = "RUN_CODEX_LOG";

/// main から使う依存の束
pub struct App {
    pub run_prompt: RunPromptUseCase,
    pub logger: Arc<dyn Log>,
}

/// ログ出力先を列挙する（RUN_CODEX_LOG のファイル、--verbose なら stderr）
fn log_targets(
    env_resolver: &dyn EnvResolver,
    fs: &Arc<dyn FileSystem>,
    verbose: bool,
) -> Vec<Arc<dyn Log>> {
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    if let Some(path) = env_resolver.var(LOG_PATH_ENV) {
        logs.push(Arc::new(FileJsonLog::new(Arc::clone(fs), path)));
    }
    if verbose {
        logs.push(Arc::new(StderrLog));
    }
    logs
}

fn wire_log(
    env_resolver: &dyn EnvResolver,
    fs: &Arc<dyn FileSystem>,
    verbose: bool,
) -> Arc<dyn Log> {
    let mut logs = log_targets(env_resolver, fs, verbose);
    match logs.len() {
        0 => Arc::new(NoopLog),
        1 => logs.remove(0),
        _ => Arc::new(FanoutLog::new(logs)),
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_run_codex(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger = wire_log(env_resolver.as_ref(), &fs, verbose);
    let provider_factory = Arc::new(OpenAiCompatProviderFactory::new(Arc::clone(&env_resolver)));

    let run_prompt = RunPromptUseCase::new(RunPromptDeps {
        env_resolver,
        prompt_source: Arc::new(StdinPromptSource),
        provider_factory,
        fs,
        log: Arc::clone(&logger),
    });

    App { run_prompt, logger }
}
