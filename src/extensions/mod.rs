//! Hooks for host-side visual elements that follow the time cursor.

pub mod subscribers;

pub use subscribers::{CursorSubscriber, CursorUpdate, SubscriberContext};
