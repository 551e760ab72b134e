pub mod config;
pub mod session;

pub use session::run_session;
