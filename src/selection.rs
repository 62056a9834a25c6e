use egui::Pos2;

/// What a hit test found under a map-local point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionHit<'a> {
    pub name: &'a str,
    pub id: Option<&'a str>,
}

/// Maps a point in map-local coordinates to the region drawn there
pub trait RegionHitTest {
    fn hit_test(&self, map_pos: Pos2) -> Option<RegionHit<'_>>;
}

/// Resolve a tap to a region and hand it to `on_select` as `(name, id)`.
///
/// Returns whether the callback ran. Misses and regions without a name are
/// silently ignored.
pub fn resolve_tap<H, F>(map_pos: Pos2, regions: &H, on_select: F) -> bool
where
    H: RegionHitTest + ?Sized,
    F: FnOnce(&str, Option<&str>),
{
    let Some(hit) = regions.hit_test(map_pos) else {
        log::debug!("Tap at {:?} hit no region", map_pos);
        return false;
    };

    if hit.name.trim().is_empty() {
        log::debug!("Tap at {:?} hit a region without a name", map_pos);
        return false;
    }

    log::info!("Region selected: {} ({:?})", hit.name, hit.id);
    on_select(hit.name, hit.id.filter(|id| !id.is_empty()));
    true
}
