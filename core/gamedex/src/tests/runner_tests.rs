use crate::adapter::{StubGameSource, XlsxSheetWriter};
use crate::cli::Config;
use crate::ports::inbound::UseCaseRunner;
use crate::usecase::{GamedexDeps, GamedexUseCase};
use crate::wiring::App;
use crate::Runner;
use common::domain::GameRecord;
use common::error::Error;
use common::log::{Log, LogRecord};
use std::sync::{Arc, Mutex};

/// 受け取ったレコードを溜め込むLog（検証用）
struct RecordingLog {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .expect("lock")
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    fn field(&self, message: &str, key: &str) -> Option<serde_json::Value> {
        self.records
            .lock()
            .expect("lock")
            .iter()
            .find(|r| r.message == message)
            .and_then(|r| r.fields.as_ref())
            .and_then(|m| m.get(key).cloned())
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().expect("lock").push(record.clone());
        Ok(())
    }
}

fn runner_with(source: StubGameSource) -> (Runner, Arc<RecordingLog>) {
    let log = Arc::new(RecordingLog::new());
    let use_case = GamedexUseCase::new(GamedexDeps {
        source: Arc::new(source),
        sheets: Arc::new(XlsxSheetWriter::new()),
        log: Arc::clone(&log) as Arc<dyn Log>,
    });
    let runner = Runner {
        app: App {
            use_case,
            logger: Arc::clone(&log) as Arc<dyn Log>,
        },
    };
    (runner, log)
}

fn config_for(words: &[&str]) -> Config {
    Config {
        positional: words.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// コマンドが失敗しても終了レコードとエラーレコードが出る
#[test]
fn test_failed_command_emits_finished_and_error_records() {
    let (runner, log) = runner_with(StubGameSource::empty());

    let result = runner.run(config_for(&["random"]));
    let err = result.unwrap_err();
    assert!(matches!(err, Error::NotFound));

    let messages = log.messages();
    assert!(messages.contains(&"command started".to_string()));
    assert!(messages.contains(&"command finished".to_string()));
    assert!(messages.contains(&err.to_string()));

    // 終了レコードのexit_codeは失敗時のコードを持つ
    assert_eq!(
        log.field("command finished", "exit_code"),
        Some(serde_json::json!(66))
    );
}

#[test]
fn test_successful_command_emits_finished_record_with_zero() {
    let source = StubGameSource::new(vec![vec![GameRecord::named("Lucky Pick")]]);
    let (runner, log) = runner_with(source);

    let result = runner.run(config_for(&["random"]));
    assert_eq!(result.unwrap(), 0);

    assert_eq!(
        log.field("command finished", "exit_code"),
        Some(serde_json::json!(0))
    );
    assert_eq!(
        log.field("command started", "command"),
        Some(serde_json::json!("random"))
    );
}
