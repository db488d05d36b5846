// Application State
// Main application state management and lifecycle

use std::sync::Arc;

use tracing::info;

use super::detail::DetailController;
use super::events::AppEvent;
use super::router::{Route, Router};
use super::AppConfig;
use crate::store::{DetailState, ListingState, MixnodeRecord, MixnodeSource, MixnodeStore};
use crate::theme::{ColorMode, ThemeConfig};

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// Main application state
pub struct App {
    /// Effective configuration
    pub config: AppConfig,

    /// Current route and back stack
    pub router: Router,

    /// Current color mode; the theme is derived from it on every frame
    pub color_mode: ColorMode,

    /// Fetched explorer data
    pub store: MixnodeStore,

    /// Detail page fetch trigger
    pub detail: DetailController,

    /// Whether the list page has run its mount effect
    listing_mounted: bool,

    /// Selected row in the mixnode list
    pub selected_index: usize,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig, source: Arc<dyn MixnodeSource>) -> Self {
        Self {
            color_mode: config.ui.color_mode,
            config,
            router: Router::new(Route::Mixnodes),
            store: MixnodeStore::new(source),
            detail: DetailController::new(),
            listing_mounted: false,
            selected_index: 0,
            should_quit: false,
        }
    }

    /// Start on a different route
    pub fn with_route(mut self, route: Route) -> Self {
        self.router = Router::new(route);
        self
    }

    /// Theme for the current color mode
    pub fn theme(&self) -> ThemeConfig {
        ThemeConfig::from_mode(self.color_mode)
    }

    /// Run the mount effects of the current route
    ///
    /// Called before every frame. Must run inside a tokio runtime because it
    /// may spawn fetches.
    pub fn sync_route(&mut self) {
        match self.router.current() {
            Route::Mixnodes => {
                if self.detail.is_mounted() {
                    self.detail.unmount(&mut self.store);
                }
                if !self.listing_mounted {
                    self.listing_mounted = true;
                    if matches!(self.store.listing(), ListingState::Idle | ListingState::Failed(_)) {
                        self.store.request_mixnodes();
                    }
                }
            }
            Route::MixnodeDetail(_) => {
                self.listing_mounted = false;
                let params = self.router.params();
                self.detail.sync(&params, &mut self.store);
            }
        }
    }

    /// Apply completed fetches; returns whether anything changed
    pub fn pump(&mut self) -> bool {
        let changed = self.store.pump();
        if changed {
            self.clamp_selection();
        }
        changed
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::SelectPrevious => self.select_previous(1),
            AppEvent::SelectNext => self.select_next(1),
            AppEvent::PageUp => self.select_previous(PAGE_SIZE),
            AppEvent::PageDown => self.select_next(PAGE_SIZE),
            AppEvent::Open => self.open_selected(),
            AppEvent::Back => self.go_back(),
            AppEvent::Refresh => self.refresh(),
            AppEvent::ToggleColorMode => self.toggle_color_mode(),
            AppEvent::None => {}
        }
    }

    /// Records shown in the list page
    pub fn records(&self) -> &[MixnodeRecord] {
        self.store.listing().records()
    }

    /// Get the currently selected list record
    pub fn selected_record(&self) -> Option<&MixnodeRecord> {
        self.records().get(self.selected_index)
    }

    /// Move selection up
    pub fn select_previous(&mut self, amount: usize) {
        if self.router.current() == &Route::Mixnodes {
            self.selected_index = self.selected_index.saturating_sub(amount);
        }
    }

    /// Move selection down
    pub fn select_next(&mut self, amount: usize) {
        if self.router.current() == &Route::Mixnodes {
            let max = self.records().len().saturating_sub(1);
            self.selected_index = (self.selected_index + amount).min(max);
        }
    }

    /// Navigate to the selected mixnode's detail page
    pub fn open_selected(&mut self) {
        if self.router.current() != &Route::Mixnodes {
            return;
        }
        if let Some(id) = self.selected_record().map(|record| record.id().clone()) {
            info!(%id, "opening mixnode detail");
            self.router.navigate(Route::detail(id));
        }
    }

    /// Go back, or quit when already at the root
    pub fn go_back(&mut self) {
        if !self.router.back() {
            self.quit();
        }
    }

    /// Re-request the data of the current page
    pub fn refresh(&mut self) {
        match self.router.current() {
            Route::Mixnodes => {
                self.store.request_mixnodes();
            }
            Route::MixnodeDetail(params) => {
                if let Some(id) = params.id.clone() {
                    self.store.request_mixnode(id);
                }
            }
        }
    }

    /// Switch between light and dark mode
    pub fn toggle_color_mode(&mut self) {
        self.color_mode = self.color_mode.toggled();
        info!(mode = %self.color_mode, "color mode changed");
    }

    /// One-line status for the footer
    pub fn status_line(&self) -> String {
        let loading = match self.router.current() {
            Route::Mixnodes => matches!(self.store.listing(), ListingState::Loading),
            Route::MixnodeDetail(_) => matches!(self.store.detail(), DetailState::Loading(_)),
        };

        if loading {
            "Loading…".to_string()
        } else if let Some(error) = self.store.last_error() {
            format!("Last error: {}", error)
        } else {
            "Ready".to_string()
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn clamp_selection(&mut self) {
        let len = self.records().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}
