use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pointer position in host screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Inclusive window of whole match seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: usize,
    pub end: usize,
}

impl TimeWindow {
    /// Builds a window from two bounds in any order.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn full(duration: usize) -> Self {
        Self {
            start: 0,
            end: duration,
        }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        time >= self.start as f64 && time <= self.end as f64
    }

    #[must_use]
    pub fn contains_index(self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    #[must_use]
    pub fn span(self) -> usize {
        self.end - self.start
    }
}
