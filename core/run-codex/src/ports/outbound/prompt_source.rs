//! プロンプト入力元 Outbound ポート
//!
//! usecase はこの trait 経由でのみ STDIN を読む。

use common::error::Error;

/// プロンプトの入力元（実装は StdinPromptSource やテスト用の固定文字列）
pub trait PromptSource: Send + Sync {
    /// 入力全体を UTF-8 文字列として読む（trim はしない）
    fn read_prompt(&self) -> Result<String, Error>;
}
