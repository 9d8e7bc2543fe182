//! Terminal output for search hits

use crate::search::Hit;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print hits to stdout, highlighting each match
pub fn print_hits(hits: &[Hit<'_>], match_len: usize, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_hits(&mut stdout, hits, match_len)
}

/// Write hits as `offset:excerpt` blocks separated by `--`
pub fn write_hits<W: WriteColor>(out: &mut W, hits: &[Hit<'_>], match_len: usize) -> io::Result<()> {
    for (i, hit) in hits.iter().enumerate() {
        if i > 0 {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            writeln!(out, "--")?;
            out.reset()?;
        }

        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", hit.offset)?;
        out.reset()?;
        write!(out, ":")?;

        write_excerpt(out, hit, match_len)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Write one excerpt with the match highlighted
fn write_excerpt<W: WriteColor>(out: &mut W, hit: &Hit<'_>, match_len: usize) -> io::Result<()> {
    let content = hit.excerpt.trim_end_matches(['\r', '\n']);
    let match_start = hit.offset.saturating_sub(hit.start).min(content.len());
    let match_end = (match_start + match_len).min(content.len());

    let (Some(before), Some(matched), Some(after)) = (
        content.get(..match_start),
        content.get(match_start..match_end),
        content.get(match_end..),
    ) else {
        // Match outside the excerpt or off a char boundary: print it plain
        return write!(out, "{}", content);
    };

    write!(out, "{}", before)?;
    if !matched.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", matched)?;
        out.reset()?;
    }
    write!(out, "{}", after)
}

/// Print excerpts as a JSON array, the same body `/search` returns
pub fn print_json(hits: &[Hit<'_>]) -> anyhow::Result<()> {
    let excerpts: Vec<&str> = hits.iter().map(|hit| hit.excerpt).collect();
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &excerpts)?;
    writeln!(stdout)?;
    Ok(())
}
