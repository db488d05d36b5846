// Router
// Path-based routes and navigation history

use tracing::warn;

use crate::store::MixnodeId;

/// Path prefix of the mixnode pages
pub const MIXNODES_PATH: &str = "/nym_mixnodes";

/// Parameters extracted from the current path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub id: Option<MixnodeId>,
}

impl RouteParams {
    pub fn with_id(id: MixnodeId) -> Self {
        Self { id: Some(id) }
    }
}

/// A page of the explorer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// `/nym_mixnodes`
    #[default]
    Mixnodes,
    /// `/nym_mixnodes/:id`
    MixnodeDetail(RouteParams),
}

impl Route {
    pub fn detail(id: MixnodeId) -> Self {
        Route::MixnodeDetail(RouteParams::with_id(id))
    }

    /// Parse a path; unknown paths fall back to the mixnode list
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() || trimmed == MIXNODES_PATH {
            return Route::Mixnodes;
        }

        match trimmed.strip_prefix(MIXNODES_PATH).and_then(|rest| rest.strip_prefix('/')) {
            Some(id) if !id.contains('/') => Route::detail(MixnodeId::from(id)),
            _ => {
                warn!(path, "unknown route, showing mixnode list");
                Route::Mixnodes
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Mixnodes => MIXNODES_PATH.to_string(),
            Route::MixnodeDetail(params) => match &params.id {
                Some(id) => format!("{}/{}", MIXNODES_PATH, id),
                None => MIXNODES_PATH.to_string(),
            },
        }
    }

    pub fn params(&self) -> RouteParams {
        match self {
            Route::Mixnodes => RouteParams::default(),
            Route::MixnodeDetail(params) => params.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Mixnodes => "Mixnodes",
            Route::MixnodeDetail(_) => "Mixnode Detail",
        }
    }
}

/// Current route plus a back stack
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn params(&self) -> RouteParams {
        self.current.params()
    }

    /// Navigate to `route`; navigating to the current route is a no-op
    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Go back one step; returns false when there is nowhere to go
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
