//! IGDB HTTPクライアント
//!
//! 認証済みのPOSTを発行し、JSONレスポンスをGameRecordに解析する。
//! レスポンス解析は寛容: 欠落フィールドはNone / 空Vecにし、クラッシュさせない。
//! nameを欠くエントリは不正形として読み飛ばす。

use crate::domain::{GameRecord, GenreName, ResultSet, SearchQuery};
use crate::error::Error;
use crate::igdb::auth::AccessToken;
use crate::igdb::query;
use rand::Rng;
use serde_json::Value;

/// IGDB v4のベースURL
pub const DEFAULT_BASE_URL: &str = "https://api.igdb.com/v4";

/// ランダム取得で引くオフセットの上限（IGDBのカタログ規模より十分小さい）
const RANDOM_OFFSET_CEILING: usize = 100_000;

/// IGDB APIクライアント（リクエストごとにステートレス）
pub struct IgdbClient {
    http: reqwest::blocking::Client,
    base_url: String,
    client_id: String,
    token: AccessToken,
}

impl IgdbClient {
    pub fn new(client_id: impl Into<String>, token: AccessToken) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, client_id, token)
    }

    /// ベースURLを差し替えて生成する（テスト用）
    pub fn with_base_url(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        token: AccessToken,
    ) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            token,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// 認証ヘッダ付きでPOSTし、ボディを文字列で返す
    fn post(&self, endpoint: &str, body: String) -> Result<String, Error> {
        let response = self
            .http
            .post(self.url(endpoint))
            .header("Client-ID", &self.client_id)
            .header("Authorization", format!("Bearer {}", self.token.as_str()))
            .header("Accept", "application/json")
            .body(body)
            .send()
            .map_err(|e| Error::network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Error::network(format!("failed to read response: {}", e)))?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(Error::auth(format!(
                "HTTP {}: {}",
                status,
                service_message(&text)
            )));
        }
        if !status.is_success() {
            return Err(Error::network(format!(
                "HTTP {}: {}",
                status,
                service_message(&text)
            )));
        }
        Ok(text)
    }

    /// タイトル・ジャンルで絞り込んだ検索。結果は空でもよい。
    pub fn search(&self, query: &SearchQuery, limit: Option<usize>) -> Result<ResultSet, Error> {
        let limit = limit.unwrap_or(query::DEFAULT_LIMIT);
        let body = query::search_body(query, limit);
        let text = self.post("games", body)?;
        Ok(ResultSet::new(parse_games(&text)?))
    }

    /// ランダムな1件を取得する。該当なしはNotFound。
    pub fn random_game(&self) -> Result<GameRecord, Error> {
        let offset = rand::rng().random_range(0..RANDOM_OFFSET_CEILING);
        let body = query::random_body(offset);
        let text = self.post("games", body)?;
        parse_games(&text)?
            .into_iter()
            .next()
            .ok_or(Error::NotFound)
    }

    /// ジャンル語彙の一覧（名前昇順）
    pub fn genres(&self) -> Result<Vec<GenreName>, Error> {
        let text = self.post("genres", query::genres_body())?;
        parse_genres(&text)
    }
}

/// gamesレスポンスのJSON配列をGameRecord列に解析する
pub(crate) fn parse_games(json: &str) -> Result<Vec<GameRecord>, Error> {
    let v: Value = serde_json::from_str(json)
        .map_err(|e| Error::json(format!("failed to parse games response: {}", e)))?;
    let entries = v
        .as_array()
        .ok_or_else(|| Error::json("games response is not an array"))?;
    Ok(entries.iter().filter_map(parse_game).collect())
}

/// 1エントリを解析する。nameがなければNone（読み飛ばし）。
fn parse_game(v: &Value) -> Option<GameRecord> {
    let name = v["name"].as_str().filter(|s| !s.is_empty())?;
    Some(GameRecord {
        name: name.to_string(),
        summary: v["summary"].as_str().map(|s| s.to_string()),
        release_date: v["first_release_date"].as_i64(),
        rating: v["total_rating"].as_f64(),
        genres: name_list(&v["genres"]),
        platforms: name_list(&v["platforms"]),
    })
}

/// `[{"name": ...}, ...]`形式のネスト配列から名前を順序どおり取り出す
fn name_list(v: &Value) -> Vec<String> {
    v.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["name"].as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// genresレスポンスを語彙リストに解析する
pub(crate) fn parse_genres(json: &str) -> Result<Vec<GenreName>, Error> {
    let v: Value = serde_json::from_str(json)
        .map_err(|e| Error::json(format!("failed to parse genres response: {}", e)))?;
    let entries = v
        .as_array()
        .ok_or_else(|| Error::json("genres response is not an array"))?;
    Ok(entries
        .iter()
        .filter_map(|item| item["name"].as_str().map(GenreName::new))
        .collect())
}

/// エラーボディからサービス側メッセージを取り出す
///
/// IGDBは`[{"title": ..., "cause": ...}]`、Twitch系は`{"message": ...}`を返す。
/// どちらでもなければ生ボディのまま返す。
fn service_message(body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(body) {
        if let Some(title) = v[0]["title"].as_str() {
            return match v[0]["cause"].as_str() {
                Some(cause) => format!("{} ({})", title, cause),
                None => title.to_string(),
            };
        }
        if let Some(msg) = v["message"].as_str() {
            return msg.to_string();
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_games_full_record() {
        let json = r#"[{
            "name": "The Legend of Zelda",
            "summary": "An adventure game.",
            "first_release_date": 509328000,
            "total_rating": 88.5,
            "genres": [{"id": 1, "name": "Adventure"}, {"id": 2, "name": "Puzzle"}],
            "platforms": [{"id": 3, "name": "NES"}]
        }]"#;
        let games = parse_games(json).unwrap();
        assert_eq!(games.len(), 1);
        let g = &games[0];
        assert_eq!(g.name, "The Legend of Zelda");
        assert_eq!(g.summary.as_deref(), Some("An adventure game."));
        assert_eq!(g.release_date, Some(509328000));
        assert_eq!(g.rating, Some(88.5));
        assert_eq!(g.genres, vec!["Adventure", "Puzzle"]);
        assert_eq!(g.platforms, vec!["NES"]);
    }

    #[test]
    fn test_parse_games_missing_optional_fields() {
        let json = r#"[{"name": "Obscure Title"}]"#;
        let games = parse_games(json).unwrap();
        assert_eq!(games.len(), 1);
        let g = &games[0];
        assert_eq!(g.name, "Obscure Title");
        assert_eq!(g.summary, None);
        assert_eq!(g.release_date, None);
        assert_eq!(g.rating, None);
        assert!(g.genres.is_empty());
        assert!(g.platforms.is_empty());
    }

    #[test]
    fn test_parse_games_skips_nameless_entries() {
        let json = r#"[{"summary": "no name"}, {"name": "Kept"}, {"name": ""}]"#;
        let games = parse_games(json).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].name, "Kept");
    }

    #[test]
    fn test_parse_games_empty_array() {
        assert!(parse_games("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_games_not_an_array() {
        let err = parse_games(r#"{"message": "oops"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_genres() {
        let json = r#"[{"id": 2, "name": "Adventure"}, {"id": 5, "name": "Shooter"}]"#;
        let genres = parse_genres(json).unwrap();
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].as_str(), "Adventure");
        assert_eq!(genres[1].as_str(), "Shooter");
    }

    #[test]
    fn test_service_message_igdb_shape() {
        let body = r#"[{"title": "Syntax Error", "status": 400, "cause": "Expecting a STRING"}]"#;
        assert_eq!(service_message(body), "Syntax Error (Expecting a STRING)");
    }

    #[test]
    fn test_service_message_twitch_shape() {
        let body = r#"{"error": "Unauthorized", "status": 401, "message": "Invalid token"}"#;
        assert_eq!(service_message(body), "Invalid token");
    }

    #[test]
    fn test_service_message_plain_body() {
        assert_eq!(service_message("gateway timeout"), "gateway timeout");
    }
}
