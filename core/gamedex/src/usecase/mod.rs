//! Usecases: ポート経由でI/Oを行うアプリケーションロジック

pub mod app;

pub use app::{GamedexDeps, GamedexUseCase};
