//! 環境変数解決 Outbound ポート
//!
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::ApiKey;
use crate::error::Error;

/// API キーを読む環境変数
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// エンドポイントのベース URL を上書きする環境変数
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
/// OpenAI-Organization ヘッダに載せる組織 ID
pub const ORG_ID_ENV: &str = "OPENAI_ORG_ID";
/// OpenAI-Project ヘッダに載せるプロジェクト ID
pub const PROJECT_ID_ENV: &str = "OPENAI_PROJECT_ID";

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のマップなど。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を読む。未設定と空文字はどちらも None。
    fn var(&self, name: &str) -> Option<String>;

    /// API キーを解決する。未設定・空なら Precondition エラー（変数名を含める）。
    fn api_key(&self) -> Result<ApiKey, Error> {
        self.var(API_KEY_ENV)
            .map(ApiKey::new)
            .ok_or_else(|| Error::precondition(format!("{} is not set", API_KEY_ENV)))
    }

    /// OPENAI_BASE_URL（未設定なら None、プロバイダ側のデフォルトを使う）
    fn base_url(&self) -> Option<String> {
        self.var(BASE_URL_ENV)
    }
}
