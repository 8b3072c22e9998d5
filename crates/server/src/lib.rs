//! HTTP surface for the voice booking tool server

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;
