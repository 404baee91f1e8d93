//! IGDB APIを使うGameSource実装
//!
//! 初回呼び出し時に認証情報を読み、トークン交換を1回だけ行って
//! クライアントを生成する。以降の呼び出しは同じクライアントを使う。

use crate::ports::outbound::{CredentialsStore, GameSource};
use common::domain::{GameRecord, GenreName, ResultSet, SearchQuery};
use common::error::Error;
use common::igdb::{exchange_token, IgdbClient};
use std::sync::{Arc, Mutex};

/// IGDBを取得元とするGameSource
pub struct IgdbGameSource {
    credentials: Arc<dyn CredentialsStore>,
    client: Mutex<Option<IgdbClient>>,
}

impl IgdbGameSource {
    pub fn new(credentials: Arc<dyn CredentialsStore>) -> Self {
        Self {
            credentials,
            client: Mutex::new(None),
        }
    }

    /// クライアントを遅延初期化して処理を実行する
    fn with_client<T>(&self, f: impl FnOnce(&IgdbClient) -> Result<T, Error>) -> Result<T, Error> {
        let mut guard = self
            .client
            .lock()
            .map_err(|_| Error::io_msg("igdb client lock poisoned"))?;
        if guard.is_none() {
            let creds = self.credentials.load()?;
            let token = exchange_token(&creds)?;
            *guard = Some(IgdbClient::new(creds.client_id, token));
        }
        let client = guard
            .as_ref()
            .ok_or_else(|| Error::io_msg("igdb client not initialized"))?;
        f(client)
    }
}

impl GameSource for IgdbGameSource {
    fn search(&self, query: &SearchQuery, limit: Option<usize>) -> Result<ResultSet, Error> {
        self.with_client(|client| client.search(query, limit))
    }

    fn random_game(&self) -> Result<GameRecord, Error> {
        self.with_client(|client| client.random_game())
    }

    fn genres(&self) -> Result<Vec<GenreName>, Error> {
        self.with_client(|client| client.genres())
    }
}
