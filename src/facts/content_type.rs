use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The source that produced a [`GameDataEntry`](super::GameDataEntry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    /// Wiki abstracts and sections from Fandom.
    Fandom,

    /// News articles from IGN.
    Ign,

    /// Reviews and previews from GameSpot.
    Gamespot,

    /// Caption transcripts of YouTube videos.
    Youtube,
}
