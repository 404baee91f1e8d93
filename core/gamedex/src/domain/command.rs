//! CLIから実行するコマンド

use common::domain::SearchQuery;
use std::path::PathBuf;

/// 実行するコマンド（CLI解析後の形）
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    /// 絞り込み検索。outputが指定されていれば結果をエクスポートする
    Search {
        query: SearchQuery,
        limit: Option<usize>,
        output: Option<PathBuf>,
    },
    /// ランダムに1件取得して表示する
    Random,
    /// ジャンル語彙の一覧を表示する
    Genres,
}
