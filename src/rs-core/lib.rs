#![allow(dead_code)]

use wasm_bindgen::prelude::*;

mod bindings;
mod bookmarks;
mod config;
mod controls;
pub mod dispatcher;
mod latency;
mod playback_rate;
mod restart;
mod utils;
mod wake_lock;

pub use utils::logger::Logger;
