pub mod http_client;
pub mod loader;
pub mod players;
pub mod session;
pub mod shuffle;
pub mod source;
pub mod state;
pub mod theme;
pub mod view;
