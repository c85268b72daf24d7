pub mod clock;
pub mod config;
pub mod fatal;
pub mod frame;
pub mod host;
pub mod input;
pub mod traits;
pub mod util;
pub mod vfs;
