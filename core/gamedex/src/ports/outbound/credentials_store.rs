//! 認証情報読み込みのOutboundポート

use common::error::Error;
use common::igdb::Credentials;

/// ローカル設定ファイルから認証情報を読む
pub trait CredentialsStore: Send + Sync {
    fn load(&self) -> Result<Credentials, Error>;
}
