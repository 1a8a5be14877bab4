use crate::config::WriteOptions;
use crate::error::{EngineError, Result};
use crate::options::WriteStrategy;
use crate::stats::ItemReport;
use crate::task::Task;
use crate::transform::FileTransform;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Read, transform and write back a single file.
///
/// Never fails as a whole: whatever goes wrong ends up in
/// [`ItemReport::outcome`]. The file is only written once the transform has
/// succeeded, so a rejected file keeps its original bytes.
pub fn process_file<T>(task: &Task, transform: &T, options: &WriteOptions) -> ItemReport
where
    T: FileTransform + ?Sized,
{
    let start = Instant::now();
    let outcome = rewrite(task.path(), transform, options);
    ItemReport {
        path: task.path().to_path_buf(),
        elapsed: start.elapsed(),
        outcome,
    }
}

fn rewrite<T>(path: &Path, transform: &T, options: &WriteOptions) -> Result<()>
where
    T: FileTransform + ?Sized,
{
    let content = fs::read(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let rewritten = transform
        .transform(&content)
        .map_err(|source| EngineError::Transform {
            path: path.to_path_buf(),
            source,
        })?;

    let written = match options.strategy {
        WriteStrategy::Truncate => write_in_place(path, rewritten.as_bytes(), options.file_mode),
        WriteStrategy::Atomic => write_atomic(path, rewritten.as_bytes(), options.file_mode),
    };
    written.map_err(|source| EngineError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Truncate and overwrite. `mode` only applies when the file has to be created.
fn write_in_place(path: &Path, data: &[u8], mode: u32) -> std::io::Result<()> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    set_create_mode(&mut opts, mode);

    let mut w = BufWriter::new(opts.open(path)?);
    w.write_all(data)?;
    w.flush()
}

/// Write through a sibling temp file and rename it over `path`.
///
/// The replacement inherits the permissions of the file it replaces, or
/// `mode` when there was nothing to replace. A symlink is resolved first so
/// the rename lands on its target and the link itself survives.
fn write_atomic(path: &Path, data: &[u8], mode: u32) -> std::io::Result<()> {
    let resolved;
    let path = if fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink()) {
        resolved = fs::canonicalize(path)?;
        resolved.as_path()
    } else {
        path
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("path has no file name"))?;

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(
        ".{}.{}.{nanos}.tmp",
        name.to_string_lossy(),
        std::process::id()
    ));

    let result = (|| {
        let mut opts = OpenOptions::new();
        opts.write(true).create_new(true);
        set_create_mode(&mut opts, mode);

        let mut w = BufWriter::new(opts.open(&tmp)?);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        drop(w);

        if let Ok(meta) = fs::metadata(path) {
            fs::set_permissions(&tmp, meta.permissions())?;
        }
        fs::rename(&tmp, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
        return result;
    }

    #[cfg(unix)]
    {
        if let Ok(dir) = fs::File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

#[cfg(unix)]
fn set_create_mode(opts: &mut OpenOptions, mode: u32) {
    use std::os::unix::fs::OpenOptionsExt;
    opts.mode(mode);
}

#[cfg(not(unix))]
fn set_create_mode(_opts: &mut OpenOptions, _mode: u32) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{LowercaseTitle, TransformError};
    use tempfile::TempDir;

    fn atomic() -> WriteOptions {
        WriteOptions {
            strategy: WriteStrategy::Atomic,
            ..WriteOptions::default()
        }
    }

    #[test]
    fn rewrites_file_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.html");
        fs::write(&path, "<title>HELLO</title>").unwrap();

        let report = process_file(&Task::new(&path), &LowercaseTitle, &WriteOptions::default());

        assert!(report.is_success(), "{:?}", report.outcome);
        assert_eq!(report.path, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<title>hello</title>");
    }

    #[test]
    fn shorter_output_truncates_old_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.html");
        fs::write(&path, "a long original body that should disappear").unwrap();
        let short = |_: &[u8]| -> std::result::Result<String, TransformError> { Ok("x".into()) };

        let report = process_file(&Task::new(&path), &short, &WriteOptions::default());

        assert!(report.is_success());
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn transform_failure_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.html");
        fs::write(&path, "<title>UNCLOSED").unwrap();

        let report = process_file(&Task::new(&path), &LowercaseTitle, &WriteOptions::default());

        assert!(matches!(report.outcome, Err(EngineError::Transform { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<title>UNCLOSED");
    }

    #[test]
    fn missing_file_reports_read_error_and_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.html");

        let report = process_file(&Task::new(&path), &LowercaseTitle, &WriteOptions::default());

        assert!(matches!(report.outcome, Err(EngineError::FileRead { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn unreadable_existing_path_reports_read_error_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dir.html");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inner.txt"), "keep").unwrap();

        for options in [WriteOptions::default(), atomic()] {
            let report = process_file(&Task::new(&path), &LowercaseTitle, &options);

            assert!(
                matches!(&report.outcome, Err(EngineError::FileRead { path: p, .. }) if *p == path),
                "{:?}",
                report.outcome
            );
            assert!(path.is_dir());
            assert_eq!(fs::read_to_string(path.join("inner.txt")).unwrap(), "keep");
            assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        }
    }

    #[test]
    fn atomic_write_replaces_content_and_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.html");
        fs::write(&path, "<title>ATOMIC</title>").unwrap();

        let report = process_file(&Task::new(&path), &LowercaseTitle, &atomic());

        assert!(report.is_success(), "{:?}", report.outcome);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<title>atomic</title>");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn created_files_get_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new.html");
        write_in_place(&path, b"<title>x</title>", crate::config::DEFAULT_FILE_MODE).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // The process umask can only remove bits.
        assert_eq!(mode & !0o644, 0);
        assert_ne!(mode & 0o600, 0);
    }

    #[cfg(unix)]
    #[test]
    fn atomic_write_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.html");
        fs::write(&path, "<title>P</title>").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        let report = process_file(&Task::new(&path), &LowercaseTitle, &atomic());

        assert!(report.is_success());
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn atomic_write_through_symlink_rewrites_the_target() {
        let dir = TempDir::new().unwrap();
        let outside = dir.path().join("outside");
        let tree = dir.path().join("tree");
        fs::create_dir_all(&outside).unwrap();
        fs::create_dir_all(&tree).unwrap();
        let target = outside.join("real.html");
        fs::write(&target, "<title>LINKED</title>").unwrap();
        let link = tree.join("link.html");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let report = process_file(&Task::new(&link), &LowercaseTitle, &atomic());

        assert!(report.is_success(), "{:?}", report.outcome);
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "<title>linked</title>");
        assert_eq!(fs::read_dir(&outside).unwrap().count(), 1);
        assert_eq!(fs::read_dir(&tree).unwrap().count(), 1);
    }
}
