//! 検索結果の表示
//!
//! usecaseが返したデータを文字列に整形する。欠落フィールドは
//! プレースホルダで表示し、エラーにはしない。

use common::domain::{GameRecord, FIELD_PLACEHOLDER};

/// 一覧表示用の1行（`N. 名前 (リリース日) [ジャンル]`）
pub fn result_line(index: usize, record: &GameRecord) -> String {
    let date = record
        .release_date_ymd()
        .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string());
    let genres = if record.genres.is_empty() {
        FIELD_PLACEHOLDER.to_string()
    } else {
        record.genres.join(", ")
    };
    format!("{:>3}. {} ({}) [{}]", index + 1, record.name, date, genres)
}

/// 1件表示用の詳細（ランダム検索の結果に使う）
pub fn record_detail(record: &GameRecord) -> String {
    let or_placeholder = |value: Option<String>| -> String {
        value.unwrap_or_else(|| FIELD_PLACEHOLDER.to_string())
    };
    let join = |values: &[String]| -> String {
        if values.is_empty() {
            FIELD_PLACEHOLDER.to_string()
        } else {
            values.join(", ")
        }
    };
    format!(
        "Name:      {}\nReleased:  {}\nGenres:    {}\nPlatforms: {}\nRating:    {}\nSummary:   {}",
        record.name,
        or_placeholder(record.release_date_ymd()),
        join(&record.genres),
        join(&record.platforms),
        or_placeholder(record.rating.map(|r| format!("{:.1}", r))),
        or_placeholder(record.summary.clone()),
    )
}
