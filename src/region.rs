use std::collections::HashSet;

use egui::{Pos2, Rect};
use serde::Deserialize;

use crate::error::{RegionMapError, RegionMapResult};
use crate::geometry::{outline_bounds, point_in_polygon};
use crate::selection::{RegionHit, RegionHitTest};

const BUNDLED_EUROPE: &str = include_str!("../assets/europe.json");

/// A named, clickable area of the map
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub outline: Vec<Pos2>,
    bounds: Rect,
}

impl Region {
    pub fn new(id: impl Into<String>, name: impl Into<String>, outline: Vec<Pos2>) -> Self {
        let bounds = outline_bounds(&outline);
        Self {
            id: id.into(),
            name: name.into(),
            outline,
            bounds,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn contains(&self, map_pos: Pos2) -> bool {
        self.bounds.contains(map_pos) && point_in_polygon(map_pos, &self.outline)
    }
}

#[derive(Debug, Deserialize)]
struct RegionFile {
    size: [f32; 2],
    regions: Vec<RegionEntry>,
}

#[derive(Debug, Deserialize)]
struct RegionEntry {
    id: String,
    #[serde(default)]
    name: String,
    outline: Vec<[f32; 2]>,
}

/// The map's region geometry, in map-local coordinates
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    size: egui::Vec2,
    regions: Vec<Region>,
}

impl RegionMap {
    pub fn new(size: egui::Vec2, regions: Vec<Region>) -> Self {
        Self { size, regions }
    }

    /// Load a map of the form
    /// `{"size": [w, h], "regions": [{"id": "ua", "name": "Ukraine", "outline": [[x, y], ...]}]}`
    pub fn from_json_str(json: &str) -> RegionMapResult<Self> {
        let file: RegionFile = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        let mut regions = Vec::with_capacity(file.regions.len());

        for entry in file.regions {
            if entry.id.is_empty() {
                return Err(RegionMapError::EmptyId);
            }
            if entry.outline.len() < 3 {
                return Err(RegionMapError::DegenerateOutline {
                    id: entry.id,
                    points: entry.outline.len(),
                });
            }
            if !seen.insert(entry.id.clone()) {
                return Err(RegionMapError::DuplicateId(entry.id));
            }
            let outline = entry.outline.iter().map(|[x, y]| Pos2::new(*x, *y)).collect();
            regions.push(Region::new(entry.id, entry.name, outline));
        }

        log::debug!("Loaded region map with {} regions", regions.len());
        Ok(Self::new(egui::vec2(file.size[0], file.size[1]), regions))
    }

    /// Simplified outlines of a handful of European countries
    pub fn bundled_europe() -> RegionMapResult<Self> {
        Self::from_json_str(BUNDLED_EUROPE)
    }

    pub fn size(&self) -> egui::Vec2 {
        self.size
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn find(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }
}

impl RegionHitTest for RegionMap {
    /// Later regions are drawn on top, so they win overlaps
    fn hit_test(&self, map_pos: Pos2) -> Option<RegionHit<'_>> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.contains(map_pos))
            .map(|region| RegionHit {
                name: &region.name,
                id: Some(&region.id),
            })
    }
}
