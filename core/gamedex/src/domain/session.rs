//! 検索セッション
//!
//! 「現在表示中の結果」を隠れた共有状態にせず、明示的なセッション
//! オブジェクトとして検索・エクスポート双方に渡す。結果は検索のたびに
//! 丸ごと差し替える。

use common::domain::ResultSet;

/// 1セッション分の状態（現在の検索結果のみ）
#[derive(Debug, Default)]
pub struct SearchSession {
    results: Option<ResultSet>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 結果を丸ごと差し替える（前の結果は残らない）
    pub fn replace(&mut self, results: ResultSet) {
        self.results = Some(results);
    }

    /// 現在の結果。まだ検索していなければNone
    pub fn current(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }
}
