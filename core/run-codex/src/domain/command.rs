//! run-codex コマンドの enum（Command Pattern）

use crate::domain::OutputPath;
use std::path::PathBuf;

/// run-codex の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum RunCodexCommand {
    /// ヘルプ表示
    Help,
    /// STDIN のプロンプトを送り、応答を output に書く
    Run {
        output: OutputPath,
        /// system instruction を読むファイル（None なら組み込みの文面）
        system_file: Option<PathBuf>,
    },
}
