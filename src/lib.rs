#![deny(unsafe_code)]
#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
mod platform;
pub mod position;
pub mod screen;
pub mod ticker;
pub mod window;

pub use app::{run, ClockApp};
pub use config::ClockConfig;
pub use error::ClockError;
