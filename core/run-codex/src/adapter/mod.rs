//! アダプター（run-codex 固有の Outbound ポート実装）

pub mod stdin_prompt_source;

pub use stdin_prompt_source::StdinPromptSource;
