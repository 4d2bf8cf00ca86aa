use std::sync::atomic::{AtomicU8, Ordering};

use crate::bindings::LogLevel;
use crate::wasm_bindgen;

static MAX_LOG_LEVEL: AtomicU8 = AtomicU8::new(4);

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum LoggerLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

pub struct Logger {}

impl Logger {
    pub fn set_logger_level(new_level: LoggerLevel) {
        MAX_LOG_LEVEL.store(new_level as u8, Ordering::Relaxed);
    }

    pub fn info(text: &str) {
        if Self::enabled(LoggerLevel::Info) {
            emit(LogLevel::Info, text);
        }
    }

    pub fn error(text: &str) {
        if Self::enabled(LoggerLevel::Error) {
            emit(LogLevel::Error, text);
        }
    }

    pub fn warn(text: &str) {
        if Self::enabled(LoggerLevel::Warn) {
            emit(LogLevel::Warn, text);
        }
    }

    pub fn debug(text: &str) {
        if Self::enabled(LoggerLevel::Debug) {
            emit(LogLevel::Debug, text);
        }
    }

    pub fn lazy_debug(func: &dyn Fn() -> String) {
        if Self::enabled(LoggerLevel::Debug) {
            emit(LogLevel::Debug, &func());
        }
    }

    fn enabled(level: LoggerLevel) -> bool {
        MAX_LOG_LEVEL.load(Ordering::Relaxed) >= level as u8
    }

    /// Drain the logs emitted so far by the current thread.
    #[cfg(test)]
    pub(crate) fn take_captured() -> Vec<(LogLevel, String)> {
        CAPTURED.with(|c| std::mem::take(&mut *c.borrow_mut()))
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, text: &str) {
    crate::bindings::jsLog(level, text);
}

#[cfg(all(not(target_arch = "wasm32"), test))]
fn emit(level: LogLevel, text: &str) {
    CAPTURED.with(|c| c.borrow_mut().push((level, text.to_owned())));
}

#[cfg(all(not(target_arch = "wasm32"), not(test)))]
fn emit(_level: LogLevel, _text: &str) {}

#[cfg(test)]
thread_local! {
    static CAPTURED: std::cell::RefCell<Vec<(LogLevel, String)>> =
        const { std::cell::RefCell::new(Vec::new()) };
}
