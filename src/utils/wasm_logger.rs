use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend: the JS console on wasm32, stderr everywhere else.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}: {}", record.level(), record.target(), record.args());

        write_line(record.level(), &message);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, message: &str) {
    let value = wasm_bindgen::JsValue::from_str(message);

    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, message: &str) {
    eprintln!("{}", message);
}

pub fn level_filter(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the console logger. Calling it again only changes the level.
pub fn init(level: LevelFilter) {
    // a second set_logger fails; the first installed logger stays active
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
