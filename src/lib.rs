pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod observability;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
