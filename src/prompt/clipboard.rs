//! Clipboard collaborator
//!
//! The session only needs "put this text where the platform can paste it".
//! `SystemClipboard` does that through arboard; tests substitute their own
//! implementation.

use std::time::Duration;

use anyhow::{Context, Result};

/// How long a short-lived command keeps serving copied text on X11/Wayland
pub const CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

/// Destination for copied document text
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Platform clipboard, opened on first use
///
/// The handle is kept open for the lifetime of the value: on X11 the
/// contents are only served while the owning handle is alive. Commands that
/// exit right after copying should call [`SystemClipboard::hold_for`].
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block each write for up to `duration` on Linux, or until another
    /// application takes ownership of the clipboard
    pub fn hold_for(&mut self, duration: Duration) {
        self.hold = Some(duration);
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn write(clipboard: &mut arboard::Clipboard, text: &str, hold: Option<Duration>) -> Result<()> {
        use arboard::SetExtLinux;

        let set = clipboard.set();
        let set = match hold {
            Some(duration) => set.wait_until(std::time::Instant::now() + duration),
            None => set,
        };
        set.text(text).context("Failed to write to system clipboard")
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    fn write(clipboard: &mut arboard::Clipboard, text: &str, _hold: Option<Duration>) -> Result<()> {
        clipboard
            .set_text(text)
            .context("Failed to write to system clipboard")
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner =
                Some(arboard::Clipboard::new().context("Failed to open system clipboard")?);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            Self::write(clipboard, text, self.hold)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_is_off_until_requested() {
        let mut clipboard = SystemClipboard::new();
        assert_eq!(clipboard.hold(), None);

        clipboard.hold_for(CLIPBOARD_HOLD);
        assert_eq!(clipboard.hold(), Some(Duration::from_secs(10)));
    }
}
