use crate::index::build::build_index_from_file;
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

/// Statistics about a built corpus index
#[derive(Debug, Clone)]
pub struct IndexStats {
    pub corpus_bytes: usize,
    pub suffix_count: usize,
    pub line_count: usize,
    pub build_time: Duration,
}

impl IndexStats {
    /// Approximate heap usage of the text, folded view and suffix array
    pub fn memory_bytes(&self) -> usize {
        self.corpus_bytes * 2 + self.suffix_count * std::mem::size_of::<u32>()
    }
}

/// Display index statistics for the corpus at `corpus_path`
pub fn show_stats(corpus_path: &Path) -> Result<()> {
    let index = build_index_from_file(corpus_path, false)?;
    let stats = index.stats();

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Corpus:           {}", corpus_path.display());
    println!("Corpus size:      {}", format_size(stats.corpus_bytes as u64));
    println!("Lines:            {}", stats.line_count);
    println!("Suffixes:         {}", stats.suffix_count);
    println!("Memory (approx):  {}", format_size(stats.memory_bytes() as u64));
    println!("Build time:       {:.2?}", stats.build_time);

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
