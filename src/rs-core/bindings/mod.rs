mod js_functions;
mod page;
#[cfg(test)]
pub(crate) mod test_support;

pub use js_functions::*;
pub(crate) use page::{
    Clock, JsPage, MediaElement, Page, RestartBackend, StreamSource, Timers, ViewerUi,
    WakeLockApi,
};
