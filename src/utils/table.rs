//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Wrap cell text to this many columns. `None` keeps the cell on one line.
    pub wrap: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            wrap: None,
        }
    }

    pub fn wrapped(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            wrap: Some(width),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Split every cell of a row into its display lines.
    fn cell_lines(&self, row: &[String]) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let text = row.get(i).map(String::as_str).unwrap_or("");
                match col.wrap {
                    Some(w) if !text.is_empty() => textwrap::wrap(text, w)
                        .into_iter()
                        .map(|l| l.into_owned())
                        .collect(),
                    _ => vec![text.to_string()],
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.to_uppercase()).collect();
        let bodies: Vec<Vec<Vec<String>>> = self.rows.iter().map(|r| self.cell_lines(r)).collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for body in &bodies {
            for (i, lines) in body.iter().enumerate() {
                for l in lines {
                    widths[i] = widths[i].max(l.width());
                }
            }
        }

        let separator = {
            let mut s = String::from("+");
            for w in &widths {
                s.push_str(&"-".repeat(w + 2));
                s.push('+');
            }
            s.push('\n');
            s
        };

        let mut out = String::new();

        // Header
        out.push_str(&separator);
        out.push('|');
        for (h, w) in headers.iter().zip(&widths) {
            let pad = w - h.width();
            let left = pad / 2;
            out.push_str(&format!(" {}{}{} |", " ".repeat(left), h, " ".repeat(pad - left)));
        }
        out.push('\n');
        out.push_str(&separator);

        // Rows
        for body in &bodies {
            let height = body.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                out.push('|');
                for (lines, w) in body.iter().zip(&widths) {
                    let text = lines.get(line).map(String::as_str).unwrap_or("");
                    out.push_str(&format!(" {}{} |", text, " ".repeat(w - text.width())));
                }
                out.push('\n');
            }
        }
        if !bodies.is_empty() {
            out.push_str(&separator);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_borders_and_centered_headers() {
        let mut t = Table::new(vec![Column::new("Time"), Column::new("Duration")]);
        t.add_row(vec!["Jan-02 09:30".into(), "30m0s".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "+--------------+----------+");
        assert_eq!(lines[1], "|     TIME     | DURATION |");
        assert_eq!(lines[3], "| Jan-02 09:30 | 30m0s    |");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn wraps_long_cells_onto_several_lines() {
        let mut t = Table::new(vec![Column::new("A"), Column::wrapped("B", 10)]);
        t.add_row(vec!["x".into(), "one two three four".into()]);
        let out = t.render();
        assert!(out.contains("| x | one two    |"));
        assert!(out.contains("|   | three four |"));
    }

    #[test]
    fn empty_table_has_only_header() {
        let t = Table::new(vec![Column::new("Time")]);
        assert_eq!(t.render().lines().count(), 3);
    }
}
