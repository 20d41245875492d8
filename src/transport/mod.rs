pub mod http_server;
pub mod websocket_server;
