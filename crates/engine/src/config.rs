use crate::options::{WalkErrorPolicy, WriteStrategy};
use derive_builder::Builder;
use std::path::PathBuf;

/// Default permission bits for files the writer has to create.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Default capacity of the task channel between dispatcher and workers.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(\"source\")")]
    pub root: PathBuf,
    #[builder(default = "String::from(\".html\")")]
    pub suffix: String,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub on_error: WalkErrorPolicy,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("source"),
            suffix: String::from(".html"),
            follow_links: false,
            on_error: WalkErrorPolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct PoolOptions {
    #[builder(default = "num_cpus::get()")]
    pub workers: usize,
    #[builder(default = "DEFAULT_QUEUE_CAPACITY")]
    pub queue_capacity: usize,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WriteOptions {
    #[builder(default)]
    pub strategy: WriteStrategy,
    #[builder(default = "DEFAULT_FILE_MODE")]
    pub file_mode: u32,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            strategy: WriteStrategy::Truncate,
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub pool: PoolOptions,
    #[builder(default)]
    pub write: WriteOptions,
}
