pub mod api;
pub mod common;
pub mod configs;
pub mod rooms;
pub mod server;
pub mod transport;
