//! Adapters: Outboundポートの実装

pub mod file_credentials;
pub mod igdb_source;
pub mod xlsx_writer;

#[cfg(test)]
pub mod stub_source;

pub use file_credentials::FileCredentialsStore;
pub use igdb_source::IgdbGameSource;
pub use xlsx_writer::XlsxSheetWriter;

#[cfg(test)]
pub use stub_source::StubGameSource;
