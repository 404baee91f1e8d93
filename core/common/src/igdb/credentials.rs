//! 認証情報ファイル用の設定型
//!
//! client id / client secretの2値をJSONから解析する。
//! ファイル読みはアダプタ側で行い、ここは文字列の解析のみ。

use crate::error::Error;
use serde::Deserialize;

/// IGDB（Twitch developer portal）の認証情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// serde用の内部構造
#[derive(Debug, Deserialize)]
struct CredentialsRaw {
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// JSON文字列から解析する。欠落・空文字はCredentialエラー。
    pub fn parse(json: &str) -> Result<Self, Error> {
        let raw: CredentialsRaw = serde_json::from_str(json)
            .map_err(|e| Error::credential(format!("invalid credentials file: {}", e)))?;
        let client_id = raw
            .client_id
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::credential("client_id is missing or empty"))?;
        let client_secret = raw
            .client_secret
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::credential("client_secret is missing or empty"))?;
        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_credentials() {
        let json = r#"{"client_id": "abc123", "client_secret": "s3cret"}"#;
        let creds = Credentials::parse(json).unwrap();
        assert_eq!(creds.client_id, "abc123");
        assert_eq!(creds.client_secret, "s3cret");
    }

    #[test]
    fn test_parse_missing_client_secret() {
        let json = r#"{"client_id": "abc123"}"#;
        let err = Credentials::parse(json).unwrap_err();
        assert!(matches!(err, Error::Credential(_)));
        assert!(err.to_string().contains("client_secret"));
    }

    #[test]
    fn test_parse_blank_client_id() {
        let json = r#"{"client_id": "  ", "client_secret": "s3cret"}"#;
        let err = Credentials::parse(json).unwrap_err();
        assert!(err.to_string().contains("client_id"));
    }

    #[test]
    fn test_parse_broken_json() {
        let err = Credentials::parse("{not json").unwrap_err();
        assert!(matches!(err, Error::Credential(_)));
    }
}
