//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits.h に合わせる。

/// エラー型
///
/// usecase・adapter は `Result<T, Error>` を返し、`?` で main まで伝播させる。
/// main は `exit_code()` で終了コードを決める。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),

    /// 実行前提の不成立（API キー未設定・入力が空など）。ネットワークには触れない。
    #[error("{reason}")]
    Precondition { reason: String },

    /// プロバイダがリクエストを拒否した（HTTP 4xx）
    #[error("OpenAI error: Error code: {status} - {detail}")]
    Provider { status: u16, detail: String },

    /// 通信失敗・サーバーエラー（HTTP 5xx）
    #[error("{0}")]
    Http(String),

    /// JSON の変換失敗・想定外のレスポンス形
    #[error("{0}")]
    Json(String),

    /// 標準入力・ファイルの I/O 失敗
    #[error("{0}")]
    Io(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::Precondition {
            reason: reason.into(),
        }
    }

    pub fn provider(status: u16, detail: impl Into<String>) -> Self {
        Self::Provider {
            status,
            detail: detail.into(),
        }
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// usage を併せて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Precondition { .. } => 64,
            Self::Provider { .. } => 65,
            Self::Http(_) => 69,
            Self::Json(_) => 70,
            Self::Io(_) => 74,
        }
    }
}
