use egui::Pos2;

/// Number of fingers the gesture interpreter looks at. Extra touches are
/// still tracked by the input adapter but never reach a [`TouchSet`].
pub const MAX_TRACKED_TOUCHES: usize = 2;

/// A single finger's current screen position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub pos: Pos2,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self {
            id,
            pos: Pos2::new(x, y),
        }
    }
}

/// The fingers currently down, in the order they touched the surface.
///
/// Holds at most [`MAX_TRACKED_TOUCHES`] points; anything beyond the first two
/// is dropped on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchSet {
    points: Vec<TouchPoint>,
}

impl TouchSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            points: points.into_iter().take(MAX_TRACKED_TOUCHES).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TouchPoint> {
        self.points.first()
    }

    /// The first two points, if at least two fingers are down
    pub fn pair(&self) -> Option<(&TouchPoint, &TouchPoint)> {
        match self.points.as_slice() {
            [a, b, ..] => Some((a, b)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TouchPoint> {
        self.points.iter()
    }
}

/// What happened to produce a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEventKind {
    Start,
    Move,
    End,
    /// System-initiated interruption (tracking lost, surface hidden, ...)
    Cancel,
}

/// One snapshot of the touch surface.
///
/// `touches` holds the fingers that are still down *after* the event, so an
/// `End` of the last finger carries an empty set.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchEventKind,
    pub touches: TouchSet,
}

impl TouchEvent {
    pub fn new(kind: TouchEventKind, touches: TouchSet) -> Self {
        Self { kind, touches }
    }

    pub fn start(points: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self::new(TouchEventKind::Start, TouchSet::from_points(points))
    }

    pub fn moved(points: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self::new(TouchEventKind::Move, TouchSet::from_points(points))
    }

    pub fn end(remaining: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self::new(TouchEventKind::End, TouchSet::from_points(remaining))
    }

    pub fn cancel() -> Self {
        Self::new(TouchEventKind::Cancel, TouchSet::empty())
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }
}
