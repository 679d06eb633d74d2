use once_cell::sync::Lazy;
use regex::Regex;

/// `  // v3.0: Reduced from 1` style suffixes: an optional run of spaces,
/// the marker with a single-digit major and minor, then everything up to
/// the end of the line. Never matches across lines.
pub static VERSION_NOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m) *// v[0-9]\.[0-9]:.*$").expect("hardcoded version-note pattern is valid")
});

/// `  // was retries: 5` style suffixes. The space after `was` is part of
/// the marker, so `// wasn't ...` is left alone.
pub static WAS_NOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m) *// was .*$").expect("hardcoded was-note pattern is valid")
});
