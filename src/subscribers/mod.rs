//! Event subscribers: the extension point and a stdout log writer.

mod log;
mod subscribe;

pub use log::LogWriter;
pub use subscribe::Subscribe;
