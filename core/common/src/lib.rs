//! gamedex共通ライブラリ
//!
//! CLI本体（`gamedex`）から使う共有機能を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（SearchQuery / GameRecord / ResultSet）
pub mod domain;

/// IGDBクライアント（認証・クエリ構築・レスポンス解析）
pub mod igdb;

/// 構造化ログ（JSONL）
pub mod log;
