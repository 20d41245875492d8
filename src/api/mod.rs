pub mod events;
pub mod models;
pub mod opcodes;

pub use events::*;
pub use models::*;
pub use opcodes::*;
