//! Pluggable content rewriting.
//!
//! A [`FileTransform`] receives the raw bytes of one file and returns the
//! replacement text. Implementations are shared by every worker thread, so
//! they must be `Send + Sync` and must not keep per-call mutable state.

use regex::{Captures, Regex};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("content is not valid UTF-8")]
    InvalidUtf8,

    #[error("malformed markup: {0}")]
    Malformed(String),
}

/// Rewrites one file's content.
pub trait FileTransform: Send + Sync {
    /// Produce the new content for `input`.
    ///
    /// # Errors
    /// Returns a [`TransformError`] when the input cannot be rewritten; the
    /// caller then leaves the file untouched.
    fn transform(&self, input: &[u8]) -> Result<String, TransformError>;
}

impl<F> FileTransform for F
where
    F: Fn(&[u8]) -> Result<String, TransformError> + Send + Sync,
{
    fn transform(&self, input: &[u8]) -> Result<String, TransformError> {
        self(input)
    }
}

/// Lower-cases the text of every `<title>` element, keeping the tag itself
/// and any attributes as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseTitle;

fn title_element() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)(<title\b[^>]*>)(.*?)(</title\s*>)").unwrap())
}

fn title_open() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<title\b").unwrap())
}

impl FileTransform for LowercaseTitle {
    fn transform(&self, input: &[u8]) -> Result<String, TransformError> {
        let text = std::str::from_utf8(input).map_err(|_| TransformError::InvalidUtf8)?;

        let opened = title_open().find_iter(text).count();
        let closed = title_element().find_iter(text).count();
        if opened != closed {
            return Err(TransformError::Malformed(format!(
                "{} <title> element(s) without a closing tag",
                opened - closed
            )));
        }

        let rewritten = title_element().replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}{}", &caps[1], caps[2].to_lowercase(), &caps[3])
        });
        Ok(rewritten.into_owned())
    }
}
