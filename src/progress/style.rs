//! Progress bar styling and configuration options.
//!
//! Two bars are drawn while a batch of classes downloads: the main bar counts
//! processed classes, a child bar counts the bytes of the document currently
//! being fetched.
//!
//! # Examples
//!
//! ```rust
//! use academy_dl::progress::{ProgressBarOpts, StyleOptions};
//!
//! // Default styling: class counter stays on screen, byte bars clear.
//! let style_options = StyleOptions::default();
//! assert!(style_options.is_enabled());
//!
//! // No bars at all.
//! let hidden = StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
//! assert!(!hidden.is_enabled());
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Style options for the class counter and the per-document byte bars.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Options for the class counter.
    pub(crate) main: ProgressBarOpts,
    /// Options for the per-document byte bars.
    pub(crate) child: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_CLASSES.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
            child: ProgressBarOpts::with_bytes_style(),
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(main: ProgressBarOpts, child: ProgressBarOpts) -> Self {
        Self { main, child }
    }

    /// Return `false` if neither bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled
    }

    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set: "filled", "current" and "to do" states.
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Class counter: `█████████▌          3/7 classes Intro to Sets`
    pub const TEMPLATE_CLASSES: &'static str = "{bar:30.blue} {pos:>}/{len} classes {msg}";
    /// Byte counter: `━━━━━━━╾── 211.23 KiB/1.02 MiB 1008.31 KiB/s 03_Sets.pdf`
    pub const TEMPLATE_BYTES: &'static str =
        "{bar:30.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} {msg}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾╴─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Byte counter styling used for document downloads.
    pub fn with_bytes_style() -> Self {
        Self {
            template: Some(Self::TEMPLATE_BYTES.into()),
            progress_chars: Some(Self::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Options which hide the bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Whether the bar is cleared once finished.
    pub fn clears(&self) -> bool {
        self.clear
    }

    /// Create a [`ProgressStyle`] from these options. An unparsable template
    /// falls back to the default bar.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = &self.template {
            style = match ProgressStyle::default_bar().template(template) {
                Ok(style) => style,
                Err(e) => {
                    warn!(template = %template, error = %e, "Invalid progress template; using the default bar");
                    style
                }
            };
        }
        if let Some(progress_chars) = &self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] of `len` units, hidden when disabled.
    ///
    /// A `len` of `None` draws a spinner-like bar of unknown length.
    pub fn to_progress_bar(&self, len: Option<u64>) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        let bar = match len {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::no_length(),
        };
        bar.with_style(self.to_progress_style())
    }

    /// Finish `bar` according to the `clear` option.
    pub fn finish(&self, bar: &ProgressBar) {
        if self.clear {
            bar.finish_and_clear();
        } else {
            bar.finish();
        }
    }
}
