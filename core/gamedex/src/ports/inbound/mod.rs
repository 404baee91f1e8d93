//! Inboundポート: CLIからusecaseを起動する入口

use crate::cli::Config;
use common::error::Error;

/// 解析済みのConfigを受けてコマンドを実行する
pub trait UseCaseRunner {
    /// 実行して終了コードを返す
    fn run(&self, config: Config) -> Result<i32, Error>;
}
