use egui::Pos2;

use super::state::{TouchEvent, TouchEventKind, TouchPoint, TouchSet};
use crate::config::GestureConfig;
use crate::transform::TransformDelta;

/// Pinch distances at or below this are treated as degenerate
const MIN_PINCH_DISTANCE: f32 = f32::EPSILON;

/// Reference captured when the second finger lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBaseline {
    pub initial_distance: f32,
    pub scale_at_pinch_start: f32,
    /// Ids of the two touches the distance was measured between
    pub touch_ids: (u64, u64),
}

impl PinchBaseline {
    fn capture(a: &TouchPoint, b: &TouchPoint, scale: f32) -> Self {
        Self {
            initial_distance: a.pos.distance(b.pos),
            scale_at_pinch_start: scale,
            touch_ids: (a.id, b.id),
        }
    }

    fn is_degenerate(&self) -> bool {
        !self.initial_distance.is_finite() || self.initial_distance <= MIN_PINCH_DISTANCE
    }

    fn tracks(&self, a: &TouchPoint, b: &TouchPoint) -> bool {
        self.touch_ids == (a.id, b.id)
    }
}

/// Where the interpreter is within a gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// A cancel arrived while fingers were still down; nothing is tracked
    /// until every finger has lifted
    Suspended,
    /// One finger down that has not yet moved past the tap threshold
    PotentialTap {
        touch_id: u64,
        start: Pos2,
        current: Pos2,
    },
    Dragging {
        touch_id: u64,
        last: Pos2,
    },
    Pinching {
        baseline: PinchBaseline,
        current_scale: f32,
    },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Suspended => "Suspended",
            Self::PotentialTap { .. } => "PotentialTap",
            Self::Dragging { .. } => "Dragging",
            Self::Pinching { .. } => "Pinching",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// No gesture in flight
    pub fn is_resting(&self) -> bool {
        matches!(self, Self::Idle | Self::Suspended)
    }
}

/// Result of feeding one snapshot to the interpreter
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureOutput {
    /// Change for the transform accumulator to apply
    pub delta: Option<TransformDelta>,
    /// Screen position of a resolved tap
    pub tap: Option<Pos2>,
    /// The gesture ended; transient transform state must be committed
    pub commit: bool,
}

impl GestureOutput {
    fn none() -> Self {
        Self::default()
    }

    fn delta(delta: TransformDelta) -> Self {
        Self {
            delta: Some(delta),
            ..Self::default()
        }
    }

    fn settle() -> Self {
        Self {
            commit: true,
            ..Self::default()
        }
    }
}

/// Computes the next state and output for one snapshot.
///
/// `current_scale` is the scale the accumulator holds right now; it seeds the
/// pinch baseline.
pub fn step(
    state: &GestureState,
    event: &TouchEvent,
    current_scale: f32,
    config: &GestureConfig,
) -> (GestureState, GestureOutput) {
    let at_rest = |touches: &TouchSet| {
        if touches.is_empty() {
            GestureState::Idle
        } else {
            GestureState::Suspended
        }
    };

    if event.kind == TouchEventKind::Cancel {
        let output = if state.is_resting() {
            GestureOutput::none()
        } else {
            GestureOutput::settle()
        };
        return (at_rest(&event.touches), output);
    }

    match state {
        GestureState::Suspended => return (at_rest(&event.touches), GestureOutput::none()),
        // Only a finger landing can begin a gesture
        GestureState::Idle if event.kind != TouchEventKind::Start => {
            return (at_rest(&event.touches), GestureOutput::none());
        }
        _ => {}
    }

    if let Some((a, b)) = event.touches.pair() {
        return step_two_fingers(state, a, b, current_scale, config);
    }

    match event.touches.first() {
        Some(point) => step_one_finger(state, point, config),
        None => release(state),
    }
}

fn release(state: &GestureState) -> (GestureState, GestureOutput) {
    let output = match *state {
        GestureState::Idle | GestureState::Suspended => GestureOutput::none(),
        GestureState::PotentialTap { current, .. } => GestureOutput {
            tap: Some(current),
            commit: true,
            ..GestureOutput::default()
        },
        GestureState::Dragging { .. } | GestureState::Pinching { .. } => GestureOutput::settle(),
    };
    (GestureState::Idle, output)
}

fn step_one_finger(
    state: &GestureState,
    point: &TouchPoint,
    config: &GestureConfig,
) -> (GestureState, GestureOutput) {
    let fresh_tap = GestureState::PotentialTap {
        touch_id: point.id,
        start: point.pos,
        current: point.pos,
    };

    match *state {
        GestureState::Idle | GestureState::Suspended => (fresh_tap, GestureOutput::none()),

        // The drag anchor stays at touch-down while the tap is undecided, so
        // the first pan delta covers the whole displacement so far
        GestureState::PotentialTap { touch_id, start, .. } => {
            if touch_id != point.id {
                return (fresh_tap, GestureOutput::none());
            }
            let displacement = point.pos - start;
            let threshold = config.tap_displacement_threshold;
            if displacement.x.abs() > threshold || displacement.y.abs() > threshold {
                let next = GestureState::Dragging {
                    touch_id,
                    last: point.pos,
                };
                (next, GestureOutput::delta(TransformDelta::Pan(displacement)))
            } else {
                let next = GestureState::PotentialTap {
                    touch_id,
                    start,
                    current: point.pos,
                };
                (next, GestureOutput::none())
            }
        }

        GestureState::Dragging { touch_id, last } => {
            let next = GestureState::Dragging {
                touch_id: point.id,
                last: point.pos,
            };
            // A different finger took over: re-anchor on it without moving
            if touch_id != point.id {
                return (next, GestureOutput::none());
            }
            let delta = point.pos - last;
            if delta == egui::Vec2::ZERO {
                (next, GestureOutput::none())
            } else {
                (next, GestureOutput::delta(TransformDelta::Pan(delta)))
            }
        }

        GestureState::Pinching { .. } => {
            let next = GestureState::Dragging {
                touch_id: point.id,
                last: point.pos,
            };
            (next, GestureOutput::none())
        }
    }
}

fn step_two_fingers(
    state: &GestureState,
    a: &TouchPoint,
    b: &TouchPoint,
    current_scale: f32,
    config: &GestureConfig,
) -> (GestureState, GestureOutput) {
    let recapture = || GestureState::Pinching {
        baseline: PinchBaseline::capture(a, b, current_scale),
        current_scale,
    };

    let GestureState::Pinching { baseline, .. } = *state else {
        return (recapture(), GestureOutput::none());
    };

    if !baseline.tracks(a, b) || baseline.is_degenerate() {
        return (recapture(), GestureOutput::none());
    }

    let ratio = a.pos.distance(b.pos) / baseline.initial_distance;
    let scale = config.clamp_scale(baseline.scale_at_pinch_start * ratio);
    if !scale.is_finite() {
        return (*state, GestureOutput::none());
    }

    let next = GestureState::Pinching {
        baseline,
        current_scale: scale,
    };
    (next, GestureOutput::delta(TransformDelta::Scale(scale)))
}

/// Classifies touch snapshots into taps, drags and pinches
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
    state: GestureState,
}

impl GestureInterpreter {
    /// An invalid config is replaced by the defaults
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config: config.validated_or_default(),
            state: GestureState::Idle,
        }
    }

    /// Feed one snapshot, in device order
    pub fn handle(&mut self, event: &TouchEvent, current_scale: f32) -> GestureOutput {
        let (next, output) = step(&self.state, event, current_scale, &self.config);
        if next.name() != self.state.name() {
            log::debug!(
                "Gesture {} -> {} on {:?} with {} touch(es)",
                self.state.name(),
                next.name(),
                event.kind,
                event.touch_count()
            );
        }
        self.state = next;
        output
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}
