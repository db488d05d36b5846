// Mixnode Explorer Library
// Terminal explorer for Nym mixnodes backed by the explorer API

// Core infrastructure - config, routing, events and app state
pub mod core;

// Store - explorer API client and fetched mixnode data
pub mod store;

// Theme - light/dark palettes and typography
pub mod theme;

// UI - TUI components, pages and the event loop
pub mod ui;

// Logging - tracing subscriber setup
pub mod logging;

// Re-export commonly used items for convenience
pub use crate::core::{App, AppConfig, Route, Router};
pub use store::{ExplorerApiClient, MixnodeId, MixnodeRecord, MixnodeSource, MixnodeStore};
pub use theme::{ColorMode, ThemeConfig};
