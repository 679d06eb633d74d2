use crate::assets;
use crate::cleaner::{self, StripSummary};
use ansi_term::Color::Red;
use anyhow::Context;
use std::fs;
use std::path::Path;

#[cfg(windows)]
pub fn terminal_init() {
    ansi_term::enable_ansi_support().expect("Could enable terminal ANSI support");
}

#[cfg(not(windows))]
pub fn terminal_init() {}

/// Rewrites the file at `path` in place: read it fully, strip the version
/// annotations, write the result back. The read completes before the write
/// starts, so a failed read leaves the file untouched. No backup is kept.
pub fn clean_path(path: &Path) -> Result<StripSummary, anyhow::Error> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("could not read config file {}", path.display()))?;

    let (cleaned, summary) = cleaner::clean(&source);
    log::debug!(
        "{}: removed {} annotations ({} version, {} was), {} -> {} bytes",
        path.display(),
        summary.total(),
        summary.version_notes,
        summary.was_notes,
        source.len(),
        cleaned.len()
    );

    fs::write(path, &cleaned)
        .with_context(|| format!("could not write config file {}", path.display()))?;

    Ok(summary)
}

pub fn root() -> ! {
    match clean_path(assets::config_path()) {
        Ok(_) => {
            println!("Cleaned config file: {}", assets::CONFIG_FILE);
            println!("Removed all inline version comments");
            std::process::exit(0)
        }
        Err(err) => {
            eprintln!("{}: {:#}", Red.bold().paint("error"), err);
            std::process::exit(1)
        }
    }
}
