use std::path::Path;

/// The one file this tool rewrites, relative to the working directory it
/// is launched from (the root of the backend checkout).
pub const CONFIG_FILE: &str = "backend/config/essenceTap.js";

pub fn config_path() -> &'static Path {
    Path::new(CONFIG_FILE)
}
