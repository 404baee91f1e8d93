//! テスト用: 固定の結果を返すGameSource実装

#[cfg(test)]
mod stub {
    use crate::ports::outbound::GameSource;
    use common::domain::{GameRecord, GenreName, ResultSet, SearchQuery};
    use common::error::Error;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// テスト用: 検索のたびに次のバッチを返すStub
    pub struct StubGameSource {
        batches: Mutex<VecDeque<Vec<GameRecord>>>,
        genres: Vec<GenreName>,
    }

    impl StubGameSource {
        pub fn new(batches: Vec<Vec<GameRecord>>) -> Self {
            Self {
                batches: Mutex::new(batches.into()),
                genres: Vec::new(),
            }
        }

        /// 常に空の結果を返すStub（ランダム検索のNotFound用）
        pub fn empty() -> Self {
            Self::new(Vec::new())
        }

        pub fn with_genres(mut self, genres: Vec<GenreName>) -> Self {
            self.genres = genres;
            self
        }
    }

    impl GameSource for StubGameSource {
        fn search(&self, _query: &SearchQuery, _limit: Option<usize>) -> Result<ResultSet, Error> {
            let batch = self
                .batches
                .lock()
                .expect("stub lock")
                .pop_front()
                .unwrap_or_default();
            Ok(ResultSet::new(batch))
        }

        fn random_game(&self) -> Result<GameRecord, Error> {
            self.batches
                .lock()
                .expect("stub lock")
                .pop_front()
                .and_then(|batch| batch.into_iter().next())
                .ok_or(Error::NotFound)
        }

        fn genres(&self) -> Result<Vec<GenreName>, Error> {
            Ok(self.genres.clone())
        }
    }
}

#[cfg(test)]
pub use stub::StubGameSource;
