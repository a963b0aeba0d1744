//! Shareable social-post text and the clipboard seam.

use crate::{Content, Error, Result};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long the "copied" indicator stays on after a successful copy
pub const COPIED_FLASH: Duration = Duration::from_secs(2);

/// Plain-text social post: title, description, solution, call to action and hashtags.
pub fn share_text(content: &Content) -> String {
    let post = &content.social_post;
    let tags = post
        .hashtags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{}\n\n{}\n\n{}\n\n🚀 {}\n\n{}",
        post.title, post.description, post.solution, post.cta, tags
    )
}

/// Outbound clipboard write
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that keeps the last written text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("clipboard unavailable".into()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that writes the text to a file.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        fs::write(&self.path, text)
            .map_err(|e| Error::Clipboard(format!("{}: {}", self.path.display(), e)))
    }
}

/// Transient "copied" indicator
#[derive(Debug, Default, Clone, Copy)]
pub struct CopiedFlag {
    since: Option<Instant>,
}

impl CopiedFlag {
    pub fn set(&mut self, now: Instant) {
        self.since = Some(now);
    }

    pub fn clear(&mut self) {
        self.since = None;
    }

    pub fn is_set(&self, now: Instant) -> bool {
        self.since
            .map(|t| now.saturating_duration_since(t) < COPIED_FLASH)
            .unwrap_or(false)
    }
}
