//! Outboundポート: usecaseが外界（API・ファイル・認証情報）を使うためのtrait

pub mod credentials_store;
pub mod game_source;
pub mod sheet_writer;

pub use credentials_store::CredentialsStore;
pub use game_source::GameSource;
pub use sheet_writer::SheetWriter;
