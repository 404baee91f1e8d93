//! 構造化ログ
//!
//! 全レイヤー（CLI / usecase / adapter）からJSONLログをファイルに出力するためのtrait。
//! エラー時のコンソール表示（stderr）とは別チャネルで、ファイルにのみ書き出す。

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// 現在時刻をISO8601 (RFC3339)で返す。LogRecordの`ts`に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// 1行分のログレコード（JSONLの1行に対応）
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ISO8601形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    /// 例: cli, usecase, adapter, wiring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    /// 例: lifecycle, config, error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 追加のキー・値（オブジェクトとして出力）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, serde_json::Value>>,
}

/// 構造化ログを出力するOutboundポート
pub trait Log: Send + Sync {
    /// 1レコードをログに書き出す（ファイルへJSONL 1行として追記）
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}

/// ファイルへJSONLを追記するLog実装
pub struct FileJsonLog {
    path: std::path::PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記するloggerを生成する。
    /// 親ディレクトリが無ければ書き込み時に作成する。
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_msg(e.to_string()))?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io_msg(e.to_string()))?;
        let line = serde_json::to_string(record).map_err(|e| Error::json(e.to_string()))?;
        file.write_all(line.as_bytes())
            .map_err(|e| Error::io_msg(e.to_string()))?;
        file.write_all(b"\n")
            .map_err(|e| Error::io_msg(e.to_string()))?;
        file.flush().map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}

/// stderrへ人間向けの1行を出すLog実装（--verbose用）
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let layer = record.layer.as_deref().unwrap_or("-");
        eprintln!("[{:?}] {} {}", record.level, layer, record.message);
        Ok(())
    }
}

/// 何も出力しないLog実装（テスト用・ログ先未設定時）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}
