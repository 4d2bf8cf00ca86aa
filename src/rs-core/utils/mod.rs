pub(crate) mod duration;
pub(crate) mod js_number;
pub(crate) mod logger;
pub(crate) mod url;
