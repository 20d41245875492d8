pub mod avatar;
pub mod code;
pub mod registry;
pub mod state;

pub use registry::RoomRegistry;
pub use state::RoomState;
