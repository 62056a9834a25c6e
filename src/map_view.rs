use egui::{Color32, Pos2, Rect, Sense, Shape, Stroke};

use crate::config::GestureConfig;
use crate::input::{GestureInterpreter, GestureState, TouchEvent, TouchInputHandler};
use crate::region::RegionMap;
use crate::selection::{RegionHitTest, resolve_tap};
use crate::transform::{MapTransform, TransformAccumulator};

const BORDER: Color32 = Color32::from_rgb(0x5a, 0x6b, 0x4e);
const LABEL: Color32 = Color32::from_rgb(0x30, 0x30, 0x30);
const BACKGROUND: Color32 = Color32::WHITE;

/// The gesture surface: interpreter, accumulator and region selection behind
/// one entry point per touch snapshot.
#[derive(Debug)]
pub struct MapView {
    interpreter: GestureInterpreter,
    accumulator: TransformAccumulator,
    input: TouchInputHandler,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl MapView {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            interpreter: GestureInterpreter::new(config),
            accumulator: TransformAccumulator::new(&config),
            input: TouchInputHandler::new(),
        }
    }

    /// Process one snapshot. `origin` is the screen position of the map's
    /// top-left corner; a resolved tap is converted to map-local coordinates
    /// before hit testing and passed to `on_select` as `(name, id)`.
    pub fn handle_touch<H, F>(&mut self, event: &TouchEvent, origin: Pos2, regions: &H, on_select: F)
    where
        H: RegionHitTest + ?Sized,
        F: FnOnce(&str, Option<&str>),
    {
        let output = self.interpreter.handle(event, self.accumulator.scale());

        if let Some(delta) = output.delta {
            self.accumulator.apply(delta);
        }
        if output.commit {
            self.accumulator.commit();
        }
        if let Some(tap) = output.tap {
            let map_pos = self.accumulator.current_transform().screen_to_map(origin, tap);
            resolve_tap(map_pos, regions, on_select);
        }
    }

    pub fn current_transform(&self) -> MapTransform {
        self.accumulator.current_transform()
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.interpreter.state()
    }

    pub fn config(&self) -> &GestureConfig {
        self.interpreter.config()
    }

    /// Drop any gesture in flight and return to no pan, unit scale
    pub fn reset_view(&mut self) {
        self.interpreter.reset();
        self.accumulator.reset();
    }

    /// Read touches for this frame, apply them and paint the map.
    /// Returns the region selected this frame, if any.
    pub fn ui(&mut self, ui: &mut egui::Ui, regions: &RegionMap) -> Option<(String, Option<String>)> {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let origin = rect.min;

        let mut selected = None;
        for event in self.input.process_input(ui.ctx(), rect) {
            self.handle_touch(&event, origin, regions, |name, id| {
                selected = Some((name.to_owned(), id.map(str::to_owned)));
            });
        }

        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.paint_regions(&painter, rect, regions);

        if !self.interpreter.state().is_idle() {
            ui.ctx().request_repaint();
        }

        selected
    }

    fn paint_regions(&self, painter: &egui::Painter, clip: Rect, regions: &RegionMap) {
        let transform = self.current_transform();
        let painter = painter.with_clip_rect(clip);
        let stroke = Stroke::new(1.5, BORDER);

        for region in regions.regions() {
            let outline: Vec<Pos2> = region
                .outline
                .iter()
                .map(|p| transform.map_to_screen(clip.min, *p))
                .collect();
            // Outlines may be concave, which egui cannot fill
            painter.add(Shape::closed_line(outline, stroke));

            let center = transform.map_to_screen(clip.min, region.bounds().center());
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                &region.name,
                egui::FontId::proportional(12.0 * transform.scale),
                LABEL,
            );
        }
    }
}
