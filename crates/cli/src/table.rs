// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text column layout for list output.

use std::io::Write;

use crate::color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tint {
    Plain,
    Muted,
}

/// One column: heading, alignment, optional width cap.
#[derive(Debug, Clone)]
pub struct Column {
    heading: String,
    align: Align,
    tint: Tint,
    max: Option<usize>,
}

impl Column {
    fn new(heading: &str, align: Align, tint: Tint) -> Self {
        Self { heading: heading.to_string(), align, tint, max: None }
    }

    pub fn left(heading: &str) -> Self {
        Self::new(heading, Align::Left, Tint::Plain)
    }

    /// Right-aligned, for numbers
    pub fn right(heading: &str) -> Self {
        Self::new(heading, Align::Right, Tint::Plain)
    }

    /// Left-aligned and rendered in the muted color
    pub fn muted(heading: &str) -> Self {
        Self::new(heading, Align::Left, Tint::Muted)
    }

    /// Truncate cells longer than `max` characters, marking them with `…`.
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    fn fit(&self, cell: &str) -> String {
        match self.max {
            Some(max) if cell.chars().count() > max && max > 0 => {
                let kept: String = cell.chars().take(max - 1).collect();
                format!("{kept}…")
            }
            _ => cell.to_string(),
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Add a row. Missing cells render empty; extra cells are dropped.
    pub fn row(&mut self, cells: Vec<String>) {
        let fitted = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| col.fit(cells.get(i).map(String::as_str).unwrap_or("")))
            .collect();
        self.rows.push(fitted);
    }

    pub fn render(&self, out: &mut (impl Write + ?Sized)) {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(col.heading.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let last = self.columns.len().saturating_sub(1);

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| color::header(&pad(&col.heading, widths[i], col.align, i == last)))
            .collect();
        let _ = writeln!(out, "{}", header.join("  ").trim_end());

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let padded = pad(&row[i], widths[i], col.align, i == last);
                    match col.tint {
                        Tint::Muted => color::muted(&padded),
                        Tint::Plain => padded,
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join("  ").trim_end());
        }
    }
}

fn pad(text: &str, width: usize, align: Align, last: bool) -> String {
    match align {
        Align::Right => format!("{text:>width$}"),
        Align::Left if last => text.to_string(),
        Align::Left => format!("{text:<width$}"),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
