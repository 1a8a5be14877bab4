/// What the walker does when a directory cannot be listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkErrorPolicy {
    /// Discard everything found so far and fail the run
    #[default]
    Abort,
    /// Log the error and leave the offending subtree out
    Skip,
}

/// How transformed content is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteStrategy {
    /// Truncate the target and write in place
    #[default]
    Truncate,
    /// Write a sibling temp file and rename it over the target
    Atomic,
}
