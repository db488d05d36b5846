// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod detail;
pub mod events;
pub mod router;
pub mod user_config;

pub use app::App;
pub use app_config::{AppConfig, CliOverrides, ConfigError};
pub use detail::DetailController;
pub use events::{AppEvent, EventHandler};
pub use router::{Route, RouteParams, Router};
pub use user_config::UserConfig;
