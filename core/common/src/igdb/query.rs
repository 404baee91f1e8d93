//! Apicalypseクエリ構築
//!
//! リクエストボディはIGDBのApicalypseテキスト。ユーザー入力は
//! ボディに埋め込む前にサニタイズする。無条件クエリ（タイトル空白・
//! ジャンルなし）にはフィルタ句を一切付けない。

use crate::domain::SearchQuery;

/// gamesエンドポイントで要求するフィールド一覧
pub const GAME_FIELDS: &str = "name,summary,first_release_date,total_rating,genres.name,platforms.name";

/// 検索の既定の最大件数
pub const DEFAULT_LIMIT: usize = 50;

/// ジャンル語彙の取得上限（IGDBの語彙は数十件）
pub const GENRE_LIMIT: usize = 100;

/// 入力文字列をボディ埋め込み用にサニタイズする
///
/// 制御文字（改行含む）を除去し、`\`と`"`をエスケープする。
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_control() {
            continue;
        }
        if ch == '\\' || ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// 検索条件からgamesエンドポイントのボディを作る
pub fn search_body(query: &SearchQuery, limit: usize) -> String {
    let mut body = String::new();
    let title = query.title.trim();
    if !title.is_empty() {
        body.push_str(&format!("search \"{}\"; ", sanitize(title)));
    }
    body.push_str(&format!("fields {}; ", GAME_FIELDS));
    if let Some(ref genre) = query.genre {
        body.push_str(&format!(
            "where genres.name = \"{}\"; ",
            sanitize(genre.as_str())
        ));
    }
    body.push_str(&format!("limit {};", limit));
    body
}

/// ランダム1件取得のボディ（指定オフセットの1件を引く）
pub fn random_body(offset: usize) -> String {
    format!(
        "fields {}; where name != null; offset {}; limit 1;",
        GAME_FIELDS, offset
    )
}

/// ジャンル語彙取得のボディ
pub fn genres_body() -> String {
    format!("fields name; sort name asc; limit {};", GENRE_LIMIT)
}
