//! Tabular string forms of individual values.
//!
//! These are the per-value renderings that the console
//! [`Formatter`](crate::Formatter) lays out side by side. Each honors the
//! row truncation settings of [`FormatOptions`].

use crate::label::Labels;
use crate::options::FormatOptions;
use crate::scalar::Scalar;
use crate::series::Series;
use crate::table::Table;

const INDEX_ELLIPSIS: &str = "..";
const VALUE_ELLIPSIS: &str = "...";
const CELL_GAP: &str = "  ";

/// Which rows survive truncation: all of them, or a head and a tail.
enum RowWindow {
    All(usize),
    Split { head: usize, tail: usize, total: usize },
}

impl RowWindow {
    fn new(total: usize, options: &FormatOptions) -> Self {
        match options.max_rows {
            Some(max) if max > 0 && total > max => {
                let shown = options.min_rows.map_or(max, |min| min.min(max));
                let tail = shown / 2;
                let head = tail.max(1);
                RowWindow::Split { head, tail, total }
            }
            _ => RowWindow::All(total),
        }
    }

    /// Row positions to show, `None` marking the elided block.
    fn positions(&self) -> Vec<Option<usize>> {
        match *self {
            RowWindow::All(total) => (0..total).map(Some).collect(),
            RowWindow::Split { head, tail, total } => (0..head)
                .map(Some)
                .chain(std::iter::once(None))
                .chain((total - tail..total).map(Some))
                .collect(),
        }
    }

    fn is_truncated(&self) -> bool {
        matches!(self, RowWindow::Split { .. })
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Summary line written under a truncated grid.
#[derive(Clone, Copy)]
enum Footer {
    /// `Length: R`, for one-dimensional values.
    Length,
    /// `[R rows x C columns]`, for tables.
    Shape,
}

fn footer(lines: &mut Vec<String>, window: &RowWindow, kind: Footer, rows: usize, columns: usize) {
    if !window.is_truncated() {
        return;
    }
    lines.push(String::new());
    lines.push(match kind {
        Footer::Length => format!("Length: {}", rows),
        Footer::Shape => format!("[{} rows x {} columns]", rows, columns),
    });
}

/// Lays out an index column followed by data columns.
fn grid(
    index: &Labels,
    columns: &[(String, &[Scalar])],
    show_header: bool,
    kind: Footer,
    options: &FormatOptions,
) -> Vec<String> {
    let window = RowWindow::new(index.len(), options);
    let positions = window.positions();

    let index_cells: Vec<String> = positions
        .iter()
        .map(|p| match p.and_then(|i| index.get(i)) {
            Some(label) => label.to_string(),
            None => INDEX_ELLIPSIS.to_string(),
        })
        .collect();
    let body: Vec<Vec<String>> = columns
        .iter()
        .map(|(_, data)| {
            positions
                .iter()
                .map(|p| match p.and_then(|i| data.get(i)) {
                    Some(scalar) => scalar.to_string(),
                    None => VALUE_ELLIPSIS.to_string(),
                })
                .collect()
        })
        .collect();

    let index_width = index_cells.iter().map(|s| char_len(s)).max().unwrap_or(0);
    let widths: Vec<usize> = columns
        .iter()
        .zip(&body)
        .map(|((header, _), cells)| {
            let cell_width = cells.iter().map(|s| char_len(s)).max().unwrap_or(0);
            if show_header {
                cell_width.max(char_len(header))
            } else {
                cell_width
            }
        })
        .collect();

    let mut lines = Vec::with_capacity(positions.len() + 3);
    if show_header {
        let mut line = " ".repeat(index_width);
        for ((header, _), width) in columns.iter().zip(&widths) {
            line.push_str(CELL_GAP);
            line.push_str(&format!("{:>width$}", header, width = width));
        }
        lines.push(line);
    }
    for (row, index_cell) in index_cells.iter().enumerate() {
        let mut line = format!("{:<width$}", index_cell, width = index_width);
        for (cells, width) in body.iter().zip(&widths) {
            line.push_str(CELL_GAP);
            line.push_str(&format!("{:>width$}", cells[row], width = width));
        }
        lines.push(line);
    }
    footer(&mut lines, &window, kind, index.len(), columns.len());
    lines
}

/// Renders a series as `label  value` lines.
#[must_use]
pub fn series_lines(series: &Series, options: &FormatOptions) -> Vec<String> {
    if series.is_empty() {
        return vec![format!("Series([], dtype: {})", series.dtype())];
    }
    let columns = [(String::new(), series.values())];
    grid(series.index(), &columns, false, Footer::Length, options)
}

/// Renders a table, with its column header unless `show_table_columns` is off.
#[must_use]
pub fn table_lines(table: &Table, options: &FormatOptions) -> Vec<String> {
    if table.is_empty() {
        let (rows, columns) = table.shape();
        return vec![format!("Empty Table ({} rows x {} columns)", rows, columns)];
    }
    let columns: Vec<(String, &[Scalar])> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, label)| (label.to_string(), table.column_data(i).unwrap_or(&[])))
        .collect();
    grid(
        table.index(),
        &columns,
        options.show_table_columns,
        Footer::Shape,
        options,
    )
}

/// Renders a label sequence, one label per line.
#[must_use]
pub fn labels_lines(labels: &Labels, options: &FormatOptions) -> Vec<String> {
    if labels.is_empty() {
        return vec!["Labels([])".to_string()];
    }
    grid(labels, &[], false, Footer::Length, options)
}
