use std::path::Path;

/// Decides which discovered entries get rewritten.
#[derive(Debug, Clone)]
pub struct PathFilter {
    suffix: String,
}

impl PathFilter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Directories never match; anything else matches when `name` ends with
    /// the configured suffix. `path` is accepted for callers that want to
    /// layer path-based rules on top and is not consulted here.
    #[must_use]
    pub fn should_process(&self, _path: &Path, is_dir: bool, name: &str) -> bool {
        !is_dir && name.ends_with(&self.suffix)
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(".html")
    }
}
