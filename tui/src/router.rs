//! Path-based navigation between the two views.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::About];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Home),
            "/about" => Some(Route::About),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Switch to `route`. Returns `true` if the view changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current == route {
            return false;
        }
        tracing::debug!(from = self.current.path(), to = route.path(), "navigate");
        self.current = route;
        true
    }

    /// Navigate by path; unknown paths are ignored.
    pub fn navigate_to(&mut self, path: &str) -> bool {
        match Route::from_path(path) {
            Some(route) => self.navigate(route),
            None => {
                tracing::warn!(path, "no route for path");
                false
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
