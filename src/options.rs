//! Configuration options for console rendering.
//!
//! [`FormatOptions`] controls how a [`LabeledDict`](crate::LabeledDict) and
//! its values are turned into text:
//!
//! - row truncation of each value (`max_rows` / `min_rows`)
//! - whether a table's own column header is shown
//! - the display width used to decide how many entries fit side by side
//!
//! ## Examples
//!
//! ```rust
//! use fancy_collections::{labeled_dict, FormatOptions, Series};
//!
//! let dict = labeled_dict! { "a" => Series::from_values(0..100) };
//!
//! let options = FormatOptions::new()
//!     .with_max_rows(10)
//!     .with_min_rows(4)
//!     .with_display_width(120);
//! let text = dict.to_string_with(&options);
//! assert!(text.contains("Length: 100"));
//! ```

use std::env;
use terminal_size::{terminal_size, Width};

/// Terminal width assumed when none can be detected.
pub const DEFAULT_TERMINAL_COLUMNS: usize = 80;

/// Environment variable consulted for the terminal width.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// Configuration options for rendering.
///
/// # Examples
///
/// ```rust
/// use fancy_collections::FormatOptions;
///
/// // No truncation, headers shown, width from the environment
/// let options = FormatOptions::new();
/// assert_eq!(options.max_rows, None);
///
/// // What `Display` uses
/// let options = FormatOptions::console();
/// assert_eq!(options.max_rows, Some(60));
/// assert_eq!(options.min_rows, Some(10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Values with more rows than this are truncated. `None` or `0` disables truncation.
    pub max_rows: Option<usize>,
    /// Number of rows shown when a value is truncated.
    pub min_rows: Option<usize>,
    /// Show the column header of table values.
    pub show_table_columns: bool,
    /// Terminal width override; detected from the environment when `None`.
    pub display_width: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_rows: None,
            min_rows: None,
            show_table_columns: true,
            display_width: None,
        }
    }
}

impl FormatOptions {
    /// Creates default options (no truncation, table headers shown).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options used by `Display`: at most 60 rows, 10 when truncated.
    #[must_use]
    pub fn console() -> Self {
        FormatOptions {
            max_rows: Some(60),
            min_rows: Some(10),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    #[must_use]
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = Some(min_rows);
        self
    }

    #[must_use]
    pub fn with_show_table_columns(mut self, show: bool) -> Self {
        self.show_table_columns = show;
        self
    }

    /// Pins the terminal width instead of reading it from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fancy_collections::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_display_width(100);
    /// assert_eq!(options.terminal_columns(), 100);
    /// assert_eq!(options.usable_width(), 80);
    /// ```
    #[must_use]
    pub fn with_display_width(mut self, columns: usize) -> Self {
        self.display_width = Some(columns);
        self
    }

    /// Terminal width: the override, else `$COLUMNS`, else the width of the
    /// attached terminal, else 80.
    #[must_use]
    pub fn terminal_columns(&self) -> usize {
        resolve_columns(
            self.display_width,
            env::var(COLUMNS_ENV).ok().as_deref(),
            || terminal_size().map(|(Width(w), _)| usize::from(w)),
        )
    }

    /// Width available to entries: 80% of the terminal width.
    #[must_use]
    pub fn usable_width(&self) -> usize {
        self.terminal_columns() * 4 / 5
    }
}

/// Picks the first usable width source. The terminal is only queried when
/// neither the override nor the environment decides.
fn resolve_columns<F>(display_width: Option<usize>, env_columns: Option<&str>, query: F) -> usize
where
    F: FnOnce() -> Option<usize>,
{
    display_width
        .or_else(|| env_columns.and_then(|v| v.trim().parse::<usize>().ok()))
        .filter(|&c| c > 0)
        .or_else(|| query().filter(|&c| c > 0))
        .unwrap_or(DEFAULT_TERMINAL_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let columns = resolve_columns(Some(120), Some("100"), || panic!("terminal queried"));
        assert_eq!(columns, 120);
    }

    #[test]
    fn test_env_before_terminal() {
        let columns = resolve_columns(None, Some(" 132 "), || panic!("terminal queried"));
        assert_eq!(columns, 132);
    }

    #[test]
    fn test_terminal_when_env_missing_or_invalid() {
        assert_eq!(resolve_columns(None, None, || Some(211)), 211);
        assert_eq!(resolve_columns(None, Some("wide"), || Some(211)), 211);
        assert_eq!(resolve_columns(None, Some("0"), || Some(211)), 211);
    }

    #[test]
    fn test_default_without_terminal() {
        assert_eq!(resolve_columns(None, None, || None), DEFAULT_TERMINAL_COLUMNS);
        assert_eq!(resolve_columns(None, None, || Some(0)), DEFAULT_TERMINAL_COLUMNS);
    }

    #[test]
    fn test_console_options() {
        let options = FormatOptions::console();
        assert_eq!((options.max_rows, options.min_rows), (Some(60), Some(10)));
        assert!(options.show_table_columns);
    }
}
