use crate::index::CorpusIndex;
use crate::utils::progress;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read the corpus file once
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so a corpus
/// with a few stray bytes still loads.
pub fn load_corpus(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read corpus {}", path.display()))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                path = %path.display(),
                valid_up_to = err.utf8_error().valid_up_to(),
                "corpus is not valid UTF-8; replacing invalid sequences"
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Build the index over `text`, showing a spinner unless `silent`
pub fn build_index(text: String, silent: bool) -> CorpusIndex {
    let spinner = progress::spinner("Building suffix array...", silent);
    let index = CorpusIndex::build(text);
    spinner.finish_and_clear();

    let stats = index.stats();
    info!(
        bytes = stats.corpus_bytes,
        lines = stats.line_count,
        elapsed_ms = stats.build_time.as_millis() as u64,
        "corpus index built"
    );
    index
}

/// Load the corpus at `path` and index it
pub fn build_index_from_file(path: &Path, silent: bool) -> Result<CorpusIndex> {
    let text = load_corpus(path)?;
    Ok(build_index(text, silent))
}
