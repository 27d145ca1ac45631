//! Code delivery implementations
//!
//! Production SMS gateways live behind the same interface; what ships here
//! is the logging delivery used in development and tests.

pub mod log_sender;

pub use log_sender::LogSmsSender;
