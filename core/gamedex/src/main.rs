mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, render, Config, ParseOutcome};
use common::error::Error;
use common::log::{now_iso8601, LogLevel, LogRecord};
use domain::{Command, SearchSession};
use ports::inbound::UseCaseRunner;
use wiring::{wire_gamedex, App};

/// Commandをディスパッチする Runner（matchはmainレイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        // エラーでも終了レコードを出すため、ここでは?で早期returnしない
        let result: Result<i32, Error> = (|| match cmd {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Genres => {
                let genres = self.app.use_case.genres()?;
                for genre in &genres {
                    println!("{}", genre);
                }
                Ok(0)
            }
            Command::Random => {
                let record = self.app.use_case.random()?;
                println!("{}", render::record_detail(&record));
                Ok(0)
            }
            Command::Search {
                query,
                limit,
                output,
            } => {
                let mut session = SearchSession::new();
                let count = self.app.use_case.search(&mut session, &query, limit)?;
                if count == 0 {
                    println!("No results.");
                } else if let Some(results) = session.current() {
                    for (i, record) in results.records().iter().enumerate() {
                        println!("{}", render::result_line(i, record));
                    }
                }
                if let Some(path) = output {
                    let rows = self.app.use_case.export(&session, &path)?;
                    println!("Exported {} records to {}", rows, path.display());
                }
                Ok(0)
            }
        })();

        let code = match &result {
            Ok(c) => *c,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn cmd_name_for_log(cmd: &Command) -> &'static str {
    match cmd {
        Command::Help => "help",
        Command::Search { .. } => "search",
        Command::Random => "random",
        Command::Genres => "genres",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("gamedex: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_gamedex(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: gamedex [options] [search|random|genres] [title...]");
}

fn print_help() {
    println!("Usage: gamedex [options] [search|random|genres] [title...]");
    println!();
    println!("Commands:");
    println!("  search [title...]   Search games by title and/or genre (also the default command)");
    println!("  random              Fetch one random game and show its details");
    println!("  genres              List the genre vocabulary returned by the API");
    println!();
    println!("Options:");
    println!("  -h, --help              Show this help message");
    println!("  -g, --genre <genre>     Filter search results by genre name");
    println!("  -n, --limit <count>     Maximum number of search results (default 50)");
    println!("  -o, --output <file>     Export the result set to this .xlsx file (overwritten)");
    println!("  -v, --verbose           Emit verbose debug logs (for troubleshooting)");
    println!("  --generate <shell>      Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  GAMEDEX_CREDENTIALS     Path to the credentials file (default ~/.config/gamedex/credentials.json)");
    println!("  GAMEDEX_LOG_FILE        Append structured JSONL logs to this file");
    println!();
    println!("The credentials file is JSON with two string values:");
    println!("  {{\"client_id\": \"...\", \"client_secret\": \"...\"}}");
}
