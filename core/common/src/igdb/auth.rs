//! トークン交換
//!
//! client id / secretをclient_credentialsフローでアプリトークンに交換する。
//! 交換は1プロセスにつき高々1回、アダプタ側で遅延実行する。
//! ここ以外のコードはAccessTokenを不透明な値としてのみ扱う。

use crate::error::Error;
use crate::igdb::credentials::Credentials;
use serde_json::Value;

/// トークンエンドポイント（テストで差し替え可能）
pub const DEFAULT_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

/// アプリアクセストークン（不透明値）
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// トークンをログ・デバッグ出力に漏らさない
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// デフォルトのエンドポイントでトークンを交換する
pub fn exchange_token(credentials: &Credentials) -> Result<AccessToken, Error> {
    exchange_token_at(DEFAULT_TOKEN_URL, credentials)
}

/// 指定エンドポイントでトークンを交換する
pub fn exchange_token_at(token_url: &str, credentials: &Credentials) -> Result<AccessToken, Error> {
    let response = reqwest::blocking::Client::new()
        .post(token_url)
        .query(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ])
        .send()
        .map_err(|e| Error::network(format!("token request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .map_err(|e| Error::network(format!("failed to read token response: {}", e)))?;

    if status.as_u16() == 401 || status.as_u16() == 403 || status.as_u16() == 400 {
        return Err(Error::auth(format!(
            "token exchange rejected (HTTP {}): {}",
            status,
            service_message(&body)
        )));
    }
    if !status.is_success() {
        return Err(Error::network(format!(
            "token exchange failed (HTTP {}): {}",
            status,
            service_message(&body)
        )));
    }

    parse_token_response(&body)
}

/// トークンレスポンスJSONからaccess_tokenを取り出す
pub(crate) fn parse_token_response(json: &str) -> Result<AccessToken, Error> {
    let v: Value = serde_json::from_str(json)
        .map_err(|e| Error::json(format!("failed to parse token response: {}", e)))?;
    v["access_token"]
        .as_str()
        .filter(|s| !s.is_empty())
        .map(AccessToken::new)
        .ok_or_else(|| Error::auth("token response has no access_token"))
}

/// エラーボディからサービス側メッセージを取り出す（取れなければ生ボディ）
fn service_message(body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(body) {
        if let Some(msg) = v["message"].as_str() {
            return msg.to_string();
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let json = r#"{"access_token": "tok_abc", "expires_in": 5000, "token_type": "bearer"}"#;
        let token = parse_token_response(json).unwrap();
        assert_eq!(token.as_str(), "tok_abc");
    }

    #[test]
    fn test_parse_token_response_missing_token() {
        let err = parse_token_response(r#"{"expires_in": 5000}"#).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[test]
    fn test_parse_token_response_broken_json() {
        let err = parse_token_response("nope").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_access_token_debug_redacted() {
        let token = AccessToken::new("tok_secret");
        assert_eq!(format!("{:?}", token), "AccessToken(***)");
    }
}
