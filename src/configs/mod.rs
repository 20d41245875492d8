pub mod base;
pub mod logging;
pub mod server;

pub use base::*;
pub use logging::*;
pub use server::*;
