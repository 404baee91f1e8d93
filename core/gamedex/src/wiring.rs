//! 配線: 標準アダプタでUseCaseを組み立てる

use std::sync::Arc;

use common::log::{FileJsonLog, Log, NoopLog, StderrLog};

use crate::adapter::{FileCredentialsStore, IgdbGameSource, XlsxSheetWriter};
use crate::ports::outbound::CredentialsStore;
use crate::usecase::{GamedexDeps, GamedexUseCase};

/// 組み立て済みアプリケーション
pub struct App {
    pub use_case: GamedexUseCase,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタでGamedexUseCaseを組み立てる
///
/// ログ先はGAMEDEX_LOG_FILE優先、未設定ならverbose時のみstderr。
pub fn wire_gamedex(verbose: bool) -> App {
    let logger: Arc<dyn Log> = match std::env::var("GAMEDEX_LOG_FILE") {
        Ok(path) if !path.trim().is_empty() => Arc::new(FileJsonLog::new(path)),
        _ if verbose => Arc::new(StderrLog),
        _ => Arc::new(NoopLog),
    };
    let credentials: Arc<dyn CredentialsStore> = Arc::new(FileCredentialsStore::from_env());
    let source = Arc::new(IgdbGameSource::new(credentials));
    let sheets = Arc::new(XlsxSheetWriter::new());
    let use_case = GamedexUseCase::new(GamedexDeps {
        source,
        sheets,
        log: Arc::clone(&logger),
    });
    App { use_case, logger }
}
