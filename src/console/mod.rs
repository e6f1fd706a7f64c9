#[macro_use]
pub mod macros;
pub mod start_message;

pub use start_message::start_message;
