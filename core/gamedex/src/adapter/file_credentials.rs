//! 認証情報ファイルのCredentialsStore実装
//!
//! パスはGAMEDEX_CREDENTIALS環境変数、未設定なら
//! ~/.config/gamedex/credentials.json。解析はcommon側で行う。

use crate::ports::outbound::CredentialsStore;
use common::error::Error;
use common::igdb::Credentials;
use std::path::PathBuf;

/// 既定の設定ファイル置き場（HOME配下）
const DEFAULT_RELATIVE_PATH: &str = ".config/gamedex/credentials.json";

/// JSONファイルから認証情報を読むCredentialsStore
pub struct FileCredentialsStore {
    path: PathBuf,
}

impl FileCredentialsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 環境変数とHOMEから既定のパスを解決する
    pub fn from_env() -> Self {
        if let Ok(path) = std::env::var("GAMEDEX_CREDENTIALS") {
            return Self::new(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self::new(PathBuf::from(home).join(DEFAULT_RELATIVE_PATH))
    }
}

impl CredentialsStore for FileCredentialsStore {
    fn load(&self) -> Result<Credentials, Error> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::credential(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        Credentials::parse(&text)
    }
}
