//! 人間向けログ（LogRecord → stderr に要点のみ出力）と複数出力先への転送

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields の要点だけを短い文字列にする（巨大化防止）
fn fields_summary(record: &LogRecord) -> String {
    let Some(ref fields) = record.fields else {
        return String::new();
    };
    let s = serde_json::to_string(fields).unwrap_or_default();
    if s.len() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, s.len())
}

/// 1 行に整形する（`[level] layer/kind message {fields}`）
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}]", record.level.as_str());
    match (&record.layer, &record.kind) {
        (Some(layer), Some(kind)) => line.push_str(&format!(" {}/{}", layer, kind)),
        (Some(layer), None) => line.push_str(&format!(" {}", layer)),
        (None, Some(kind)) => line.push_str(&format!(" {}", kind)),
        (None, None) => {}
    }
    line.push(' ');
    line.push_str(&record.message);
    let summary = fields_summary(record);
    if !summary.is_empty() {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// --verbose 用: 整形したレコードを stderr に出す Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(record));
        Ok(())
    }
}

/// 複数の Log に同じレコードを渡す。1 つが失敗しても残りには書き、最初のエラーを返す。
pub struct FanoutLog {
    logs: Vec<Arc<dyn Log>>,
}

impl FanoutLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for FanoutLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.logs {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogLevel;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CollectLog(Mutex<Vec<String>>);

    impl Log for CollectLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.message.clone());
            Ok(())
        }
    }

    struct FailLog;

    impl Log for FailLog {
        fn log(&self, _record: &LogRecord) -> Result<(), Error> {
            Err(Error::io_msg("log disk full"))
        }
    }

    #[test]
    fn test_format_line() {
        let rec = LogRecord::new(LogLevel::Info, "usecase", "output", "patch written")
            .field("bytes", 12);
        assert_eq!(
            format_line(&rec),
            "[info] usecase/output patch written {\"bytes\":12}"
        );
    }

    #[test]
    fn test_format_line_truncates_large_fields() {
        let rec = LogRecord::new(LogLevel::Debug, "adapter", "llm", "big")
            .field("blob", "x".repeat(1000));
        let line = format_line(&rec);
        assert!(line.contains("... (len="));
        assert!(line.len() < 600);
    }

    #[test]
    fn test_fanout_log_writes_all_and_reports_first_error() {
        let a = Arc::new(CollectLog::default());
        let b = Arc::new(CollectLog::default());
        let fanout = FanoutLog::new(vec![
            a.clone() as Arc<dyn Log>,
            Arc::new(FailLog),
            b.clone() as Arc<dyn Log>,
        ]);
        let err = fanout
            .log(&LogRecord::new(LogLevel::Info, "cli", "lifecycle", "hello"))
            .unwrap_err();
        assert_eq!(err, Error::io_msg("log disk full"));
        assert_eq!(*a.0.lock().unwrap(), vec!["hello".to_string()]);
        assert_eq!(*b.0.lock().unwrap(), vec!["hello".to_string()]);
    }
}
