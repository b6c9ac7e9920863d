use tracing::warn;

use crate::error::{ViewerError, ViewerResult};
use crate::extensions::CursorSubscriber;
use crate::render::Renderer;

use super::ViewerEngine;

impl<R: Renderer> ViewerEngine<R> {
    /// Registers a cursor subscriber with a unique identifier.
    pub fn register_subscriber(&mut self, subscriber: Box<dyn CursorSubscriber>) -> ViewerResult<()> {
        let subscriber_id = subscriber.id().to_owned();
        if subscriber_id.is_empty() {
            warn!("rejecting subscriber with empty id");
            return Err(ViewerError::InvalidData(
                "subscriber id must not be empty".to_owned(),
            ));
        }
        if self.has_subscriber(&subscriber_id) {
            warn!(subscriber_id = %subscriber_id, "rejecting duplicate subscriber");
            return Err(ViewerError::InvalidData(format!(
                "subscriber with id `{subscriber_id}` is already registered"
            )));
        }
        self.subscribers.push(subscriber);
        Ok(())
    }

    /// Unregisters a subscriber by id. Returns `true` when removed.
    pub fn unregister_subscriber(&mut self, subscriber_id: &str) -> bool {
        if let Some(position) = self
            .subscribers
            .iter()
            .position(|entry| entry.id() == subscriber_id)
        {
            self.subscribers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn has_subscriber(&self, subscriber_id: &str) -> bool {
        self.subscribers
            .iter()
            .any(|subscriber| subscriber.id() == subscriber_id)
    }
}
