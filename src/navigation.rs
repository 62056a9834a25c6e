pub const MAP_TITLE: &str = "Map of Europe";
pub const DETAILS_FALLBACK_TITLE: &str = "Country details";

/// Screens the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Map,
    CountryDetails {
        name: Option<String>,
        id: Option<String>,
    },
}

impl Route {
    pub fn title(&self) -> &str {
        match self {
            Route::Map => MAP_TITLE,
            Route::CountryDetails { name: Some(name), .. } => name,
            Route::CountryDetails { name: None, .. } => DETAILS_FALLBACK_TITLE,
        }
    }
}

/// Stack of screens with the map at the bottom
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Map],
        }
    }

    pub fn current(&self) -> &Route {
        // The map route is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn navigate_to_details(&mut self, name: &str, id: Option<&str>) {
        log::info!("Navigating to details of {} ({:?})", name, id);
        self.stack.push(Route::CountryDetails {
            name: Some(name.to_owned()),
            id: id.map(str::to_owned),
        });
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Pop the current screen; the map itself stays
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.stack.pop();
        true
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
