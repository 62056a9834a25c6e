use crate::config::GestureConfig;
use crate::map_view::MapView;
use crate::navigation::{Navigator, Route};
use crate::panels::{self, DetailsContent};
use crate::region::RegionMap;

/// The map screen plus the details screen it navigates to
#[derive(Debug)]
pub struct MapApp {
    view: MapView,
    regions: RegionMap,
    navigator: Navigator,
}

impl Default for MapApp {
    fn default() -> Self {
        Self::with_config(GestureConfig::default())
    }
}

impl MapApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GestureConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: GestureConfig) -> Self {
        let regions = RegionMap::bundled_europe().unwrap_or_else(|err| {
            log::error!("Failed to load bundled region map: {}", err);
            RegionMap::default()
        });
        Self::with_regions(config, regions)
    }

    pub fn with_regions(config: GestureConfig, regions: RegionMap) -> Self {
        Self {
            view: MapView::new(config),
            regions,
            navigator: Navigator::new(),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn map_view(&self) -> &MapView {
        &self.view
    }

    pub fn map_view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }

    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    /// Split borrow so the view can hit test against the regions
    pub fn map_parts(&mut self) -> (&mut MapView, &RegionMap) {
        (&mut self.view, &self.regions)
    }
}

impl eframe::App for MapApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.navigator.back();
        }

        panels::title_bar(self, ctx);

        match self.navigator.current().clone() {
            Route::Map => panels::map_panel(self, ctx),
            Route::CountryDetails { name, id } => {
                let content = DetailsContent::new(name.as_deref(), id.as_deref());
                panels::details_panel(ctx, &content);
            }
        }
    }
}
