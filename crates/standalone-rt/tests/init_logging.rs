//! The startup announcement goes through the `log` facade exactly once.

use log::{Level, LevelFilter, Log, Metadata, Record};
use standalone_rt::init;
use std::sync::Mutex;

struct Capture {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target() == "standalone_rt" {
            let line = record.args().to_string();
            self.lines.lock().unwrap().push((record.level(), line));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn announce_logs_backend_once() {
    log::set_logger(&CAPTURE).expect("logger already set");
    log::set_max_level(LevelFilter::Trace);

    assert!(!init::announced());
    assert!(init::announce(), "first call must log");
    assert!(init::announced());
    assert!(!init::announce(), "second call must not log");

    let lines = CAPTURE.lines.lock().unwrap();
    let backend = format!("allocator backend: {}", standalone_rt::BACKEND);
    let infos: Vec<_> = lines
        .iter()
        .filter(|(level, _)| *level == Level::Info)
        .collect();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].1, backend);
    assert!(lines
        .iter()
        .any(|(level, line)| *level == Level::Debug && line.starts_with("platform profile:")));

    let warned = lines.iter().any(|(level, _)| *level == Level::Warn);
    assert_eq!(warned, standalone_rt::PROFILE.overridden());
}
