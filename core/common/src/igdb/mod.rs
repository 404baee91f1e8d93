//! IGDBクライアント
//!
//! 認証情報の解析（credentials）、トークン交換（auth）、
//! Apicalypseクエリ構築（query）、HTTP呼び出しとレスポンス解析（client）。
//! クライアントはリクエストごとにステートレスで、再試行は行わない。

pub mod auth;
pub mod client;
pub mod credentials;
pub mod query;

pub use auth::{exchange_token, AccessToken};
pub use client::IgdbClient;
pub use credentials::Credentials;
