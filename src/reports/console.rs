use crate::Result;
use crate::facts::{AUTHOR, ContentType, GameDataEntry, GameDataResponse, PUBLICATION_DATE};
use core::fmt::Write;
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

/// Characters of content shown per entry.
const EXCERPT_CHARS: usize = 160;

pub fn generate<W: Write>(response: &GameDataResponse, use_colors: bool, writer: &mut W) -> Result<()> {
    let stats = &response.stats;

    if use_colors {
        writeln!(writer, "{}", response.game_name.bold())?;
    } else {
        writeln!(writer, "{}", response.game_name)?;
    }

    writeln!(writer, "  Entries             : {}", stats.total_entries)?;
    writeln!(writer, "  Average reliability : {}", format_score(stats.average_reliability, use_colors))?;
    writeln!(writer, "  Collection time     : {:.2}s", stats.collection_duration)?;

    for content_type in ContentType::iter() {
        let count = stats.entries_by_type.get(&content_type).copied().unwrap_or(0);
        writeln!(writer, "  {:<19} : {count}", content_type.to_string())?;
    }

    for (index, entry) in response.entries.iter().enumerate() {
        writeln!(writer)?;
        write_entry(writer, index + 1, entry, use_colors)?;
    }

    Ok(())
}

fn write_entry<W: Write>(writer: &mut W, number: usize, entry: &GameDataEntry, use_colors: bool) -> Result<()> {
    let tag = entry.content_type().to_string();
    if use_colors {
        writeln!(
            writer,
            "{number:>3}. [{}] {} {}",
            tag.cyan(),
            format_score(entry.reliability_score(), true),
            entry.url().underline()
        )?;
    } else {
        writeln!(writer, "{number:>3}. [{tag}] {} {}", format_score(entry.reliability_score(), false), entry.url())?;
    }

    let byline = match (entry.attribute(AUTHOR), entry.attribute(PUBLICATION_DATE)) {
        (Some(author), Some(date)) => Some(format!("{author}, {date}")),
        (Some(author), None) => Some(author.to_string()),
        (None, Some(date)) => Some(date.to_string()),
        (None, None) => None,
    };

    if let Some(byline) = byline {
        writeln!(writer, "     {byline}")?;
    }

    writeln!(writer, "     {}", excerpt(entry.content()))?;
    Ok(())
}

fn format_score(score: f64, use_colors: bool) -> String {
    let text = format!("{score:.1}");
    if !use_colors {
        return text;
    }

    if score >= 7.5 {
        text.green().to_string()
    } else if score >= 5.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// First line-folded [`EXCERPT_CHARS`] characters of `content`.
fn excerpt(content: &str) -> String {
    let folded = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if folded.chars().count() <= EXCERPT_CHARS {
        return folded;
    }

    let mut text: String = folded.chars().take(EXCERPT_CHARS).collect();
    text.push('…');
    text
}
