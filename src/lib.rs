pub mod app;
pub mod auth;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod progress;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_store, resolve_data_dir};
