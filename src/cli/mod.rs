mod args;
mod config;
mod decode;
mod sync;

pub use args::{Args, Command};
pub use config::run_config;
pub use decode::run_decode;
pub use sync::{run_compare, run_sync};
