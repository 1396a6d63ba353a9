//! Console rendering of a whole dictionary.
//!
//! Every entry becomes a column: its key as header, a row of `=`, then the
//! rendered value's lines centered below. Columns of different heights are
//! padded with blanks. When the entries are wider than the terminal, a
//! prefix and a suffix of them are shown around a `...` column.
//!
//! ```rust
//! use fancy_collections::{labeled_dict, labels, FormatOptions, Series};
//!
//! let dict = labeled_dict! {
//!     "a" => Series::filled(11, labels![0, 1]),
//!     "b" => Series::filled(22, labels![0, 1, 2]),
//! };
//! let text = dict.to_string_with(&FormatOptions::new().with_display_width(80));
//! assert_eq!(
//!     text,
//!     "    a |     b | \n\
//!      ===== | ===== | \n\
//!      0  11 | 0  22 | \n\
//!      1  11 | 1  22 | \n      \
//!      | 2  22 | \n"
//! );
//! ```

use crate::label::Label;
use crate::options::FormatOptions;
use crate::value::Value;
use std::fmt;
use tracing::debug;

/// Separator placed after every column.
pub const COLUMN_SEPARATOR: &str = " | ";

/// Character repeated under every header.
pub const HEADER_SEPARATOR: char = '=';

/// Placeholder for entries that do not fit.
pub const ELLIPSIS: &str = "...";

struct Column {
    key: String,
    lines: Vec<String>,
    width: usize,
}

impl Column {
    fn new(key: String, lines: Vec<String>) -> Self {
        let width = lines
            .iter()
            .chain(std::iter::once(&key))
            .map(|s| char_len(s))
            .max()
            .unwrap_or(0);
        Column { key, lines, width }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Centers `s` in `width` columns. An uneven margin puts the extra space
/// on the left only when `width` is odd.
fn center(s: &str, width: usize) -> String {
    let len = char_len(s);
    if len >= width {
        return s.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Left-justifies every line of `text` to the longest one.
fn justify_block(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines.iter().map(|l| char_len(l)).max().unwrap_or(0);
    lines
        .into_iter()
        .map(|l| format!("{:<width$}", l, width = width))
        .collect()
}

/// Chooses which entries fit in `usable` columns of text.
///
/// Entries are taken pairwise from both ends. One running width is kept for
/// both sides; an entry joins the front (back) set while the running width
/// stays below `usable`.
pub(crate) fn select_columns(widths: &[usize], usable: usize) -> (Vec<bool>, Vec<bool>) {
    let n = widths.len();
    let mut front = vec![false; n];
    let mut back = vec![false; n];
    let mut line_length = 0usize;
    for (f, b) in (0..n).zip((0..n).rev()) {
        line_length += widths[f];
        if line_length < usable {
            front[f] = true;
        }
        line_length += widths[b];
        if line_length < usable {
            back[b] = true;
        }
    }
    (front, back)
}

/// Header text for an entry, given its key and value.
pub type KeyFormat<'a> = Box<dyn Fn(&Label, &Value) -> String + 'a>;

/// Lays out dictionary entries side by side.
///
/// Headers default to the key's display form. A custom [`KeyFormat`] can
/// decorate them, for instance to mark the kind of value underneath.
///
/// ```rust
/// use fancy_collections::{labeled_dict, labels, FormatOptions, Formatter};
///
/// let dict = labeled_dict! { "a" => labels![1, 2] };
/// let options = FormatOptions::new().with_display_width(80);
/// let text = Formatter::new(&options)
///     .with_key_format(|key, value| format!("{} [{}]", key, value.type_name()))
///     .format("LabeledDict", dict.iter());
/// assert!(text.starts_with("a [Labels] | "));
/// ```
pub struct Formatter<'a> {
    options: &'a FormatOptions,
    key_format: Option<KeyFormat<'a>>,
}

impl<'a> Formatter<'a> {
    #[must_use]
    pub fn new(options: &'a FormatOptions) -> Self {
        Formatter {
            options,
            key_format: None,
        }
    }

    /// Replaces the header text of every entry.
    #[must_use]
    pub fn with_key_format<F>(mut self, key_format: F) -> Self
    where
        F: Fn(&Label, &Value) -> String + 'a,
    {
        self.key_format = Some(Box::new(key_format));
        self
    }

    /// Header text for an entry.
    #[must_use]
    pub fn key_to_string(&self, key: &Label, value: &Value) -> String {
        match &self.key_format {
            Some(format) => format(key, value),
            None => key.to_string(),
        }
    }

    /// Text lines of one value; empty values describe their shape instead.
    #[must_use]
    pub fn stringify(&self, value: &Value) -> Vec<String> {
        if !value.is_empty() {
            return value.to_lines(self.options);
        }
        match value {
            Value::Series(s) => {
                justify_block(&format!("Empty {}\n rows: {}\n", value.type_name(), s.len()))
            }
            Value::Table(t) => {
                let (rows, columns) = t.shape();
                justify_block(&format!(
                    "Empty {}\n rows:    {}\n columns: {}\n",
                    value.type_name(),
                    rows,
                    columns
                ))
            }
            Value::Labels(_) => vec![format!("Empty {}", value.type_name())],
        }
    }

    /// Renders `entries` as a grid, or `"Empty <type_name>"` when there are none.
    #[must_use]
    pub fn format<'b, I>(&self, type_name: &str, entries: I) -> String
    where
        I: IntoIterator<Item = (&'b Label, &'b Value)>,
    {
        let columns: Vec<Column> = entries
            .into_iter()
            .map(|(key, value)| Column::new(self.key_to_string(key, value), self.stringify(value)))
            .collect();
        if columns.is_empty() {
            return format!("Empty {}", type_name);
        }

        let widths: Vec<usize> = columns.iter().map(|c| c.width).collect();
        let usable = self.options.usable_width();
        let (front, back) = select_columns(&widths, usable);

        let overlap = front.iter().zip(&back).any(|(f, b)| *f && *b);
        let covered = front.iter().zip(&back).all(|(f, b)| *f || *b);
        debug!(
            entries = columns.len(),
            front = front.iter().filter(|f| **f).count(),
            back = back.iter().filter(|b| **b).count(),
            usable_width = usable,
            "selected columns to display"
        );

        let placeholder = Column::new(ELLIPSIS.to_string(), vec![ELLIPSIS.to_string()]);
        let mut shown: Vec<&Column> = Vec::with_capacity(columns.len() + 1);
        shown.extend(columns.iter().zip(&front).filter(|(_, f)| **f).map(|(c, _)| c));
        if !overlap && !covered {
            shown.push(&placeholder);
        }
        shown.extend(
            columns
                .iter()
                .zip(front.iter().zip(&back))
                .filter(|(_, (f, b))| **b && !**f)
                .map(|(c, _)| c),
        );

        render(&shown)
    }
}

impl fmt::Debug for Formatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("options", self.options)
            .field("key_format", &self.key_format.is_some())
            .finish()
    }
}

fn render(columns: &[&Column]) -> String {
    let mut out = String::new();
    for c in columns {
        out.push_str(&format!("{:>width$}", c.key, width = c.width));
        out.push_str(COLUMN_SEPARATOR);
    }
    out.push('\n');
    for c in columns {
        out.extend(std::iter::repeat(HEADER_SEPARATOR).take(c.width));
        out.push_str(COLUMN_SEPARATOR);
    }
    out.push('\n');

    let mut row = 0;
    while columns.iter().any(|c| row < c.lines.len()) {
        for c in columns {
            match c.lines.get(row) {
                Some(line) => out.push_str(&center(line, c.width)),
                None => out.push_str(&" ".repeat(c.width)),
            }
            out.push_str(COLUMN_SEPARATOR);
        }
        out.push('\n');
        row += 1;
    }
    out
}
