//! CLI: 引数解析とコマンドへの変換、結果の表示

pub mod args;
pub mod render;

pub use args::{parse_args, print_completion, Config, ParseOutcome};
#[cfg(test)]
pub use args::parse_args_from;

use crate::domain::Command;
use common::domain::{GenreName, SearchQuery};

/// 解析済みConfigをドメインのCommandに変換する
pub fn config_to_command(config: Config) -> Command {
    if config.help {
        return Command::Help;
    }
    let (word, rest) = match config.positional.split_first() {
        Some((first, rest)) => (first.as_str(), rest),
        None => {
            // 位置引数なし: ジャンル指定だけの検索か、ヘルプ
            if config.genre.is_some() {
                ("search", &[][..])
            } else {
                return Command::Help;
            }
        }
    };
    match word {
        "random" => Command::Random,
        "genres" => Command::Genres,
        "search" => Command::Search {
            query: SearchQuery::new(rest.join(" "), config.genre.map(GenreName::new)),
            limit: config.limit,
            output: config.output,
        },
        // コマンド語なし: 位置引数全体をタイトルとして検索する
        _ => Command::Search {
            query: SearchQuery::new(
                config.positional.join(" "),
                config.genre.map(GenreName::new),
            ),
            limit: config.limit,
            output: config.output,
        },
    }
}
