//! コマンドライン引数の解析

use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

/// 解析済みのコマンドライン引数
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: 不具合調査用の冗長ログを出力する
    pub verbose: bool,
    /// -g / --genre: ジャンルで絞り込む（`gamedex genres`で語彙を確認）
    pub genre: Option<String>,
    /// -n / --limit: 検索結果の最大件数
    pub limit: Option<usize>,
    /// -o / --output: 検索結果をxlsxにエクスポートする先
    pub output: Option<PathBuf>,
    pub positional: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            genre: None,
            limit: None,
            output: None,
            positional: Vec::new(),
        }
    }
}

/// 解析結果: 通常のConfig / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("gamedex")
        .about("Search the IGDB game database and export results to a spreadsheet")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("genre")
                .short('g')
                .long("genre")
                .value_name("genre")
                .help("Filter by genre name (see `gamedex genres` for the vocabulary)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("limit")
                .short('n')
                .long("limit")
                .value_name("count")
                .help("Maximum number of search results (default 50)")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("file.xlsx")
                .help("Export the result set to this spreadsheet file (overwritten)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("Command (search, random, genres) or title words to search for")
                .num_args(0..),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        genre: matches.get_one::<String>("genre").cloned(),
        limit: matches.get_one::<usize>("limit").copied(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        positional: matches
            .get_many::<String>("positional")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合はGenerateCompletionを返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let opts = "-h --help -v --verbose -g --genre -n --limit -o --output --generate";
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for gamedex (options + commands)
_gamedex() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "search random genres {opts}" -- "$cur"))
}}
complete -F _gamedex gamedex
"#,
                opts = opts
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for gamedex (options + commands)
#compdef gamedex
local -a reply
reply=(search random genres {opts})
_describe 'gamedex' reply
"#,
                opts = opts
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for gamedex (options + commands)
complete -c gamedex -l help -s h -d "Show help"
complete -c gamedex -l verbose -s v -d "Verbose logs"
complete -c gamedex -l genre -s g -d "Filter by genre" -r
complete -c gamedex -l limit -s n -d "Max results" -r
complete -c gamedex -l output -s o -d "Export to xlsx" -r
complete -c gamedex -l generate -d "Generate completion script" -r -a "bash zsh fish"
complete -c gamedex -a "search random genres"
"#
            );
        }
        _ => {
            eprintln!("gamedex: completion for {} is not supported", shell);
        }
    }
}
