use super::patterns;
use derive_more::Constructor;
use regex::Regex;

/// Per-pattern deletion counts for one cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct StripSummary {
    pub version_notes: usize,
    pub was_notes: usize,
}

impl StripSummary {
    pub fn total(&self) -> usize {
        self.version_notes + self.was_notes
    }
}

/// Pass 1: deletes `// vN.N:` suffixes, along with the run of spaces
/// immediately before the marker.
pub fn strip_version_notes(source: &str) -> (String, usize) {
    strip_suffixes(&patterns::VERSION_NOTE, source)
}

/// Pass 2: deletes `// was ` suffixes. Must run on pass 1 output so that
/// an annotation only exposed as a line suffix by pass 1 is still caught.
pub fn strip_was_notes(source: &str) -> (String, usize) {
    strip_suffixes(&patterns::WAS_NOTE, source)
}

// Both patterns are `$`-anchored, so the hit count is the number of lines
// touched.
fn strip_suffixes(marker: &Regex, source: &str) -> (String, usize) {
    let hits = marker.find_iter(source).count();
    (marker.replace_all(source, "").into_owned(), hits)
}
