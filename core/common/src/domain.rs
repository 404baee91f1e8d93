//! ドメイン型
//!
//! 検索条件（SearchQuery）・1件分のメタデータ（GameRecord）・
//! 検索結果（ResultSet）と、エクスポートの列スキーマを定義する。
//! Stringを直接運ばず、意味のある型に包んで境界を明確にする。

/// ジャンル名（APIが返す語彙から選ぶ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreName(String);

impl GenreName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GenreName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 検索条件: タイトル自由文（空可）＋任意のジャンル
///
/// 両方が空のときは無条件フェッチ（フィルタ句なし）として扱う。
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub title: String,
    pub genre: Option<GenreName>,
}

impl SearchQuery {
    pub fn new(title: impl Into<String>, genre: Option<GenreName>) -> Self {
        Self {
            title: title.into(),
            genre,
        }
    }

    /// タイトルが空白のみ、かつジャンル未指定なら無条件フェッチ
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.genre.is_none()
    }
}

/// 1件分のゲームメタデータ
///
/// name以外はAPIレスポンスに存在しないことがある。欠落はエラーではなく
/// None / 空Vecで表す。
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub name: String,
    pub summary: Option<String>,
    /// 初回リリース日（unix秒）
    pub release_date: Option<i64>,
    /// 総合評価（0-100）
    pub rating: Option<f64>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
}

impl GameRecord {
    /// 名前だけのレコード（残りは欠落扱い）
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: None,
            release_date: None,
            rating: None,
            genres: Vec::new(),
            platforms: Vec::new(),
        }
    }

    /// リリース日を`YYYY-MM-DD`で返す（欠落・範囲外はNone）
    pub fn release_date_ymd(&self) -> Option<String> {
        let ts = self.release_date?;
        let dt = chrono::DateTime::from_timestamp(ts, 0)?;
        Some(dt.format("%Y-%m-%d").to_string())
    }
}

/// 1回の検索の結果。検索のたびに丸ごと差し替える（マージしない）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    records: Vec<GameRecord>,
}

impl ResultSet {
    pub fn new(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 欠落フィールドの表示・出力に使うプレースホルダ
pub const FIELD_PLACEHOLDER: &str = "-";

/// エクスポートの列スキーマ（固定順。行0はこのヘッダ）
pub const EXPORT_COLUMNS: [&str; 6] = [
    "name",
    "release_date",
    "genres",
    "platforms",
    "rating",
    "summary",
];

/// 1レコードをEXPORT_COLUMNS順の文字列セルに変換する
///
/// 欠落フィールドはFIELD_PLACEHOLDER。複数値はカンマ区切りで1セルに収める。
pub fn export_row(record: &GameRecord) -> [String; 6] {
    let join = |values: &[String]| -> String {
        if values.is_empty() {
            FIELD_PLACEHOLDER.to_string()
        } else {
            values.join(", ")
        }
    };
    [
        record.name.clone(),
        record
            .release_date_ymd()
            .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string()),
        join(&record.genres),
        join(&record.platforms),
        record
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string()),
        record
            .summary
            .clone()
            .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string()),
    ]
}
