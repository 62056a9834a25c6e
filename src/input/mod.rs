use egui::{Context, Event, PointerButton, Pos2, Rect};

pub mod gestures;
pub mod state;

pub use gestures::{GestureInterpreter, GestureOutput, GestureState, PinchBaseline};
pub use state::{TouchEvent, TouchEventKind, TouchPoint, TouchSet};

/// Touch id used when the primary mouse button stands in for a finger
pub const POINTER_TOUCH_ID: u64 = u64::MAX;

/// Converts raw egui events into ordered [`TouchEvent`] snapshots.
///
/// Real touches win: while any finger is down, or when the frame carries touch
/// events at all, pointer events are ignored so that the pointer emulation
/// egui performs for touch screens is not counted twice.
#[derive(Debug, Default)]
pub struct TouchInputHandler {
    /// Every finger currently down, in the order it landed
    active: Vec<TouchPoint>,
    /// Last position of the primary button while it is held
    pointer: Option<Pos2>,
}

impl TouchInputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's events from the egui context
    pub fn process_input(&mut self, ctx: &Context, surface: Rect) -> Vec<TouchEvent> {
        ctx.input(|input| self.process_events(&input.events, surface))
    }

    /// Produce one snapshot per relevant event, preserving event order.
    /// Gestures may only begin inside `surface`.
    pub fn process_events(&mut self, events: &[Event], surface: Rect) -> Vec<TouchEvent> {
        let has_touch = events.iter().any(|e| matches!(e, Event::Touch { .. }));
        let mut snapshots = Vec::new();

        for event in events {
            match event {
                Event::Touch { id, phase, pos, .. } => {
                    self.on_touch(id.0, *phase, *pos, surface, &mut snapshots)
                }
                _ if has_touch || !self.active.is_empty() => {}
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => self.on_pointer_button(*pos, *pressed, surface, &mut snapshots),
                Event::PointerMoved(pos) => snapshots.extend(self.on_pointer_moved(*pos)),
                Event::PointerGone => snapshots.extend(self.on_pointer_gone()),
                _ => {}
            }
        }

        snapshots
    }

    pub fn active_touch_count(&self) -> usize {
        self.active.len() + usize::from(self.pointer.is_some())
    }

    fn on_touch(
        &mut self,
        id: u64,
        phase: egui::TouchPhase,
        pos: Pos2,
        surface: Rect,
        out: &mut Vec<TouchEvent>,
    ) {
        let tracked = self.active.iter().position(|t| t.id == id);
        match (phase, tracked) {
            (egui::TouchPhase::Start, None) => {
                if surface.contains(pos) {
                    self.active.push(TouchPoint { id, pos });
                    out.push(self.snapshot(TouchEventKind::Start));
                }
            }
            (egui::TouchPhase::Start | egui::TouchPhase::Move, Some(index)) => {
                out.extend(self.move_to(index, pos));
            }
            (egui::TouchPhase::End, Some(index)) => {
                // A lift away from the last reported position moves first
                out.extend(self.move_to(index, pos));
                self.active.remove(index);
                out.push(self.snapshot(TouchEventKind::End));
            }
            (egui::TouchPhase::Cancel, Some(index)) => {
                self.active.remove(index);
                out.push(self.snapshot(TouchEventKind::Cancel));
            }
            // Events for fingers that started outside the surface
            (_, None) => {}
        }
    }

    fn move_to(&mut self, index: usize, pos: Pos2) -> Option<TouchEvent> {
        if self.active[index].pos == pos {
            return None;
        }
        self.active[index].pos = pos;
        Some(self.snapshot(TouchEventKind::Move))
    }

    fn on_pointer_button(&mut self, pos: Pos2, pressed: bool, surface: Rect, out: &mut Vec<TouchEvent>) {
        match (pressed, self.pointer) {
            (true, None) if surface.contains(pos) => {
                self.pointer = Some(pos);
                out.push(self.pointer_snapshot(TouchEventKind::Start, pos));
            }
            (false, Some(_)) => {
                out.extend(self.on_pointer_moved(pos));
                self.pointer = None;
                out.push(TouchEvent::end([]));
            }
            _ => {}
        }
    }

    fn on_pointer_moved(&mut self, pos: Pos2) -> Option<TouchEvent> {
        let last = self.pointer.as_mut()?;
        if *last == pos {
            return None;
        }
        *last = pos;
        Some(self.pointer_snapshot(TouchEventKind::Move, pos))
    }

    fn on_pointer_gone(&mut self) -> Option<TouchEvent> {
        self.pointer.take().map(|_| TouchEvent::cancel())
    }

    fn pointer_snapshot(&self, kind: TouchEventKind, pos: Pos2) -> TouchEvent {
        TouchEvent::new(
            kind,
            TouchSet::from_points([TouchPoint {
                id: POINTER_TOUCH_ID,
                pos,
            }]),
        )
    }

    fn snapshot(&self, kind: TouchEventKind) -> TouchEvent {
        TouchEvent::new(kind, TouchSet::from_points(self.active.iter().copied()))
    }
}
