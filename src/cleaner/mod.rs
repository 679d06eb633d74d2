pub mod patterns;
pub mod strip;

pub use strip::StripSummary;

/// Cleans one config text in memory: first the `// vN.N:` annotations,
/// then any `// was ...` annotations still sitting at end of line. The
/// second pass runs on the first pass's output.
pub fn clean(source: &str) -> (String, StripSummary) {
    let (source, version_notes) = strip::strip_version_notes(source);
    let (source, was_notes) = strip::strip_was_notes(&source);

    (source, StripSummary::new(version_notes, was_notes))
}
