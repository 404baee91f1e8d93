//! ゲームメタデータ取得のOutboundポート
//!
//! 実装はadapter::IgdbGameSource（IGDB API）とテスト用のStub。

use common::domain::{GameRecord, GenreName, ResultSet, SearchQuery};
use common::error::Error;

/// ゲームメタデータの取得元
pub trait GameSource: Send + Sync {
    /// 絞り込み検索。結果は空でもよい。
    fn search(&self, query: &SearchQuery, limit: Option<usize>) -> Result<ResultSet, Error>;

    /// ランダムに1件取得する。該当なしはErr(NotFound)。
    fn random_game(&self) -> Result<GameRecord, Error>;

    /// APIが返すジャンル語彙の一覧
    fn genres(&self) -> Result<Vec<GenreName>, Error>;
}
