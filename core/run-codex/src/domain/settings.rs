//! リクエストの固定パラメータ

/// 送信先モデル
pub const MODEL: &str = "gpt-4o-mini";

/// 温度（決定的な出力を優先して低めにする）
pub const TEMPERATURE: f64 = 0.1;

/// 最大出力トークン数
pub const MAX_TOKENS: u32 = 2048;

/// 出力先の既定パス（カレントディレクトリ相対）
pub const DEFAULT_OUTPUT: &str = "codex.patch";
