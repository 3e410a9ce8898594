use crate::core::{Message, Result, Sink};

/// Drops every message without running its body formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    #[inline]
    fn render(&mut self, _message: &Message<'_>) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
