use super::{ContentType, GameDataEntry};
use crate::Result;
use async_trait::async_trait;
use ohno::app_err;

/// A source of information about games.
///
/// Implementations are registered with an [`Aggregator`](super::Aggregator), which calls
/// [`collect`](Self::collect) concurrently with every other registered collector. A
/// collector should rate-limit its own upstream calls and return an error rather than
/// panic when the upstream misbehaves; an error only removes this collector's
/// contribution from the response.
#[async_trait]
pub trait Collector: Send + Sync {
    /// The tag carried by every entry this collector produces.
    fn content_type(&self) -> ContentType;

    /// Name used in log messages.
    fn name(&self) -> &str {
        self.content_type().into()
    }

    /// Gather entries about `game_name`.
    ///
    /// An empty list is a valid outcome and means the source had nothing to offer.
    async fn collect(&self, game_name: &str) -> Result<Vec<GameDataEntry>>;
}

/// Check that every entry carries the collector's own content type.
pub fn ensure_entries_match(content_type: ContentType, entries: &[GameDataEntry]) -> Result<()> {
    if let Some(stray) = entries.iter().find(|e| e.content_type() != content_type) {
        return Err(app_err!(
            "{content_type} collector produced an entry tagged {} for '{}'",
            stray.content_type(),
            stray.url()
        ));
    }

    Ok(())
}
