use super::GameDataEntry;
use std::collections::HashMap;

/// Remove duplicate entries, first by URL and then by content.
///
/// Within each group of duplicates the entry with the highest reliability score survives.
/// On a tie the earliest entry wins and keeps its position. Running this on an
/// already-deduplicated list returns it unchanged.
#[must_use]
pub fn remove_duplicates(entries: Vec<GameDataEntry>) -> Vec<GameDataEntry> {
    let by_url = keep_best_by(entries, GameDataEntry::url);
    keep_best_by(by_url, GameDataEntry::content)
}

fn keep_best_by<F>(entries: Vec<GameDataEntry>, key: F) -> Vec<GameDataEntry>
where
    F: Fn(&GameDataEntry) -> &str,
{
    let mut slots: Vec<GameDataEntry> = Vec::with_capacity(entries.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(entries.len());

    for entry in entries {
        if let Some(&slot) = index.get(key(&entry)) {
            if entry.reliability_score() > slots[slot].reliability_score() {
                slots[slot] = entry;
            }
        } else {
            let _ = index.insert(key(&entry).to_string(), slots.len());
            slots.push(entry);
        }
    }

    slots
}
