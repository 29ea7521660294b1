//! Reading parsed corpora and writing exports

use crate::error::{DramanetError, DramanetResult};
use crate::export::CorpusExport;
use crate::play::Corpus;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Load a parsed corpus (`{"plays": [...]}` or a bare list).
pub fn load_corpus(path: &Path) -> DramanetResult<Corpus> {
    let file = File::open(path).map_err(|e| DramanetError::io(path, e))?;
    let corpus: Corpus = serde_json::from_reader(BufReader::new(file))?;
    info!(path = %path.display(), plays = corpus.plays.len(), "corpus loaded");
    Ok(corpus)
}

/// Write an export as pretty-printed UTF-8 JSON, creating parent directories.
pub fn write_export(path: &Path, export: &CorpusExport) -> DramanetResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| DramanetError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| DramanetError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, export)?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| DramanetError::io(path, e))?;
    info!(path = %path.display(), plays = export.plays.len(), "export written");
    Ok(())
}
