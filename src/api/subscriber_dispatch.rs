use crate::extensions::{CursorUpdate, SubscriberContext};
use crate::render::Renderer;

use super::ViewerEngine;

impl<R: Renderer> ViewerEngine<R> {
    pub(super) fn subscriber_context(&self) -> SubscriberContext {
        SubscriberContext {
            duration: self.data.duration(),
            cursor: self.cursor.snapshot(),
            detail_window: self.scales.time_scale().visible_range(),
        }
    }

    /// Fans an update out in registration order, after the cursor was written.
    pub(super) fn dispatch_cursor_update(&mut self, update: CursorUpdate<'_>) {
        let context = self.subscriber_context();
        for subscriber in &mut self.subscribers {
            subscriber.on_cursor_update(update, context);
        }
    }
}
