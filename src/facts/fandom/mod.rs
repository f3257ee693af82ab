mod fandom_data;
mod provider;

pub use fandom_data::{FandomError, FandomPage, FandomPages, FandomSearch, FandomSection};
pub use provider::{FANDOM_BASE_URL, Provider, section_anchor, wiki_score};
