use std::fmt;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// Up and Cancel both end the contact and go through the same resolution.
    pub fn ends_contact(self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// One observed pointer position, in screen (raw) coordinates.
///
/// Raw coordinates are used so that translating the surface under the
/// finger does not feed back into the measured displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub raw_x: f32,
    pub timestamp_millis: i64,
}

impl GestureSample {
    pub fn new(raw_x: f32, timestamp_millis: i64) -> Self {
        Self {
            raw_x,
            timestamp_millis,
        }
    }
}

/// A pointer event as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub sample: GestureSample,
}

impl PointerInput {
    pub fn new(kind: PointerEventKind, raw_x: f32, timestamp_millis: i64) -> Self {
        Self {
            id: 0,
            kind,
            sample: GestureSample::new(raw_x, timestamp_millis),
        }
    }

    pub fn down(raw_x: f32, timestamp_millis: i64) -> Self {
        Self::new(PointerEventKind::Down, raw_x, timestamp_millis)
    }

    pub fn moved(raw_x: f32, timestamp_millis: i64) -> Self {
        Self::new(PointerEventKind::Move, raw_x, timestamp_millis)
    }

    pub fn up(raw_x: f32, timestamp_millis: i64) -> Self {
        Self::new(PointerEventKind::Up, raw_x, timestamp_millis)
    }

    pub fn cancel(raw_x: f32, timestamp_millis: i64) -> Self {
        Self::new(PointerEventKind::Cancel, raw_x, timestamp_millis)
    }

    /// Set the pointer this event belongs to.
    pub fn with_pointer(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for PointerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}#{} x={} t={}ms",
            self.kind, self.id, self.sample.raw_x, self.sample.timestamp_millis
        )
    }
}
