//! Sink trait for log output destinations

use super::{error::Result, message::Message};

/// A backend that renders messages to one destination.
///
/// The logger serializes all calls to [`Sink::render`], so implementations
/// need no locking of their own. A sink must not keep the message or any
/// buffer borrowed from it past the call.
pub trait Sink: Send {
    /// Render one message and flush it to the destination.
    fn render(&mut self, message: &Message<'_>) -> Result<()>;

    fn name(&self) -> &str;
}
