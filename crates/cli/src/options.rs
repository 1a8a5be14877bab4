use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum WalkErrorPolicy {
    /// Stop the whole run on the first unreadable directory
    #[default]
    Abort,
    /// Warn and leave the unreadable subtree out
    Skip,
}
