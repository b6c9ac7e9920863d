use serde::{Deserialize, Serialize};

use crate::core::TimeWindow;
use crate::interaction::{BrushFrame, CursorSnapshot, HoverFrame};

/// Read-only state passed to subscriber hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubscriberContext {
    pub duration: usize,
    pub cursor: CursorSnapshot,
    pub detail_window: TimeWindow,
}

/// Update fanned out after each pointer or brush pass.
///
/// A brush pass that moves an active hover's markers follows `Brushed` with
/// a fresh `Hovered`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorUpdate<'a> {
    Hovered(&'a HoverFrame),
    Cleared,
    Brushed(BrushFrame),
}

/// Visual element kept in sync with the shared time cursor.
///
/// Subscribers observe updates without access to the cursor state itself;
/// the engine remains its only writer.
pub trait CursorSubscriber {
    fn id(&self) -> &str;
    fn on_cursor_update(&mut self, update: CursorUpdate<'_>, context: SubscriberContext);
}
