//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            min_width: 0,
        }
    }

    pub fn width(mut self, w: usize) -> Self {
        self.min_width = w;
        self
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

    /// Column widths: the widest of header, min width and every cell.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain([col.header.chars().count(), col.min_width])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let line = |cells: &[String], out: &mut String| {
            let row: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<width$}", c, width = w))
                .collect();
            out.push_str(row.join(" ").trim_end());
            out.push('\n');
        };

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        line(&headers, &mut out);
        line(&rule, &mut out);
        for row in &self.rows {
            line(row, &mut out);
        }

        out
    }
}
