//! エラーハンドリング
//!
//! エラー分類は操作の失敗原因ごとに分ける。再試行は行わず、
//! すべて呼び出し元（CLI）へ同期的に返す。

/// gamedex全体で使うエラー型
///
/// `exit_code()`はsysexits.h準拠。
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// 引数不正（使い方の誤り）
    #[error("{0}")]
    InvalidArgument(String),
    /// 認証情報の欠落・不正（設定ファイル起因）
    #[error("credentials: {0}")]
    Credential(String),
    /// APIによる認証拒否（401/403）。認証情報の修正を促すため区別する
    #[error("authentication rejected: {0}")]
    Auth(String),
    /// ネットワーク・転送層の失敗
    #[error("network: {0}")]
    Network(String),
    /// レスポンスJSONの解析失敗
    #[error("malformed response: {0}")]
    Json(String),
    /// ランダム検索で該当レコードなし
    #[error("no matching game found")]
    NotFound,
    /// エクスポート先への書き込み失敗
    #[error("export: {0}")]
    Export(String),
    /// その他のI/O失敗
    #[error("I/O: {0}")]
    Io(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn credential(msg: impl Into<String>) -> Self {
        Self::Credential(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// プロセス終了コード（sysexits.h準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::NotFound => 66,
            Self::Network(_) => 69,
            Self::Export(_) => 73,
            Self::Io(_) => 74,
            Self::Auth(_) => 77,
            Self::Credential(_) => 78,
        }
    }

    /// 使い方の誤りかどうか（mainでusageを表示する判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("bad flag");
        assert_eq!(err.to_string(), "bad flag");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::credential("client_id is empty");
        assert_eq!(err.exit_code(), 78);
        assert!(!err.is_usage());
    }

    #[test]
    fn test_error_display_prefixes() {
        assert!(Error::network("timed out").to_string().starts_with("network:"));
        assert!(Error::auth("401").to_string().starts_with("authentication rejected:"));
        assert_eq!(Error::NotFound.to_string(), "no matching game found");
    }

    #[test]
    fn test_exit_codes_distinct() {
        let codes = [
            Error::invalid_argument("x").exit_code(),
            Error::json("x").exit_code(),
            Error::NotFound.exit_code(),
            Error::network("x").exit_code(),
            Error::export("x").exit_code(),
            Error::io_msg("x").exit_code(),
            Error::auth("x").exit_code(),
            Error::credential("x").exit_code(),
        ];
        let mut dedup = codes.to_vec();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), codes.len());
    }
}
