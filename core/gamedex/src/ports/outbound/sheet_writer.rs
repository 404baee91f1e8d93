//! スプレッドシート出力のOutboundポート

use common::domain::ResultSet;
use common::error::Error;
use std::path::Path;

/// 結果セットをスプレッドシートファイルに書き出す
///
/// 1レコード1行・列順はEXPORT_COLUMNS固定・出力先は上書き。
pub trait SheetWriter: Send + Sync {
    fn write(&self, results: &ResultSet, path: &Path) -> Result<(), Error>;
}
