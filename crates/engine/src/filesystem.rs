use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use crate::filter::PathFilter;
use crate::options::WalkErrorPolicy;
use crate::task::{Task, TaskList};
use ignore::WalkBuilder;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Recursive directory walk producing the ordered list of files to rewrite.
///
/// Every entry below `options.root` is visited: hidden files and ignore
/// files are deliberately not honoured. Entries are yielded in lexical file
/// name order within each directory, so two walks over the same tree produce
/// the same list.
///
/// # Errors
/// Returns [`EngineError::RootNotFound`] if the root cannot be stat'ed or,
/// for a directory root, listed. Under [`WalkErrorPolicy::Abort`] the first
/// traversal error is returned as [`EngineError::Walk`] and the partial list
/// is dropped; under [`WalkErrorPolicy::Skip`] errors below the root are
/// logged and the walk goes on, while an error on the root itself still
/// aborts.
pub fn walk(options: &WalkOptions, filter: &PathFilter) -> Result<TaskList> {
    let root = &options.root;
    check_root(root)?;

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut tasks = TaskList::default();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => match options.on_error {
                WalkErrorPolicy::Abort => {
                    let path = error_path(&source).map_or_else(|| root.clone(), Path::to_path_buf);
                    return Err(EngineError::Walk { path, source });
                }
                WalkErrorPolicy::Skip if error_path(&source) == Some(root.as_path()) => {
                    return Err(EngineError::Walk {
                        path: root.clone(),
                        source,
                    });
                }
                WalkErrorPolicy::Skip => {
                    warn!("skipping unreadable entry: {source}");
                    continue;
                }
            },
        };

        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        let name = entry.file_name().to_string_lossy();
        if filter.should_process(entry.path(), is_dir, &name) {
            tasks.push(Task::new(entry.path()));
        }
    }

    debug!(
        "walk of {} found {} file(s) ending in {:?}",
        root.display(),
        tasks.len(),
        filter.suffix()
    );
    Ok(tasks)
}

/// The root must exist and, when it is a directory, be listable.
fn check_root(root: &Path) -> Result<()> {
    let to_root_error = |source| EngineError::RootNotFound {
        path: root.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(root).map_err(to_root_error)?;
    if metadata.is_dir() {
        fs::read_dir(root).map_err(to_root_error)?;
    }
    Ok(())
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

/// `path` relative to `root`, or `path` itself when it lies elsewhere.
#[must_use]
pub fn display_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
