//! Outbound ポート: run-codex がプロンプト入力元を使うための trait

pub mod prompt_source;

pub use prompt_source::PromptSource;
