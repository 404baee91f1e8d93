//! gamedexのユースケース（アダプター経由でI/Oを行う）
//!
//! usecaseはデータのみ返し、表示はCLIの責務。検索はセッションの
//! 結果を丸ごと差し替え、エクスポートはセッションの現在結果を書き出す。

use crate::domain::SearchSession;
use crate::ports::outbound::{GameSource, SheetWriter};
use common::domain::{GameRecord, GenreName, SearchQuery};
use common::error::Error;
use common::log::{now_iso8601, Log, LogLevel, LogRecord};
use std::path::Path;
use std::sync::Arc;

/// usecaseの依存（wiringは組み立てるだけ）
pub struct GamedexDeps {
    pub source: Arc<dyn GameSource>,
    pub sheets: Arc<dyn SheetWriter>,
    pub log: Arc<dyn Log>,
}

/// gamedexのユースケース
pub struct GamedexUseCase {
    deps: GamedexDeps,
}

impl GamedexUseCase {
    pub fn new(deps: GamedexDeps) -> Self {
        Self { deps }
    }

    /// 絞り込み検索を実行し、セッションの結果を差し替える。件数を返す。
    pub fn search(
        &self,
        session: &mut SearchSession,
        query: &SearchQuery,
        limit: Option<usize>,
    ) -> Result<usize, Error> {
        let results = self.deps.source.search(query, limit)?;
        let count = results.len();
        self.log_info(
            "search completed",
            &[
                ("title", serde_json::json!(query.title)),
                (
                    "genre",
                    serde_json::json!(query.genre.as_ref().map(|g| g.as_str())),
                ),
                ("count", serde_json::json!(count)),
            ],
        );
        session.replace(results);
        Ok(count)
    }

    /// セッションの現在結果をスプレッドシートに書き出す。行数（ヘッダ除く）を返す。
    pub fn export(&self, session: &SearchSession, path: &Path) -> Result<usize, Error> {
        let results = session.current().ok_or_else(|| {
            Error::invalid_argument("no search results to export; run a search first")
        })?;
        self.deps.sheets.write(results, path)?;
        self.log_info(
            "export completed",
            &[
                ("path", serde_json::json!(path.display().to_string())),
                ("rows", serde_json::json!(results.len())),
            ],
        );
        Ok(results.len())
    }

    /// ランダムに1件取得する
    pub fn random(&self) -> Result<GameRecord, Error> {
        let record = self.deps.source.random_game()?;
        self.log_info("random fetch completed", &[("name", serde_json::json!(record.name))]);
        Ok(record)
    }

    /// ジャンル語彙の一覧を返す。表示はCLIの責務のため、usecaseはデータのみ返す。
    pub fn genres(&self) -> Result<Vec<GenreName>, Error> {
        self.deps.source.genres()
    }

    fn log_info(&self, message: &str, fields: &[(&str, serde_json::Value)]) {
        let _ = self.deps.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: message.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                for (k, v) in fields {
                    m.insert(k.to_string(), v.clone());
                }
                Some(m)
            },
        });
    }
}
