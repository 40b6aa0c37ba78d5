//! Plain-text tables.
//!
//! Used to draw diagrams cell by cell. A framed table looks like
//!
//! ```text
//! +---+---+
//! | x | x |
//! +---+---+
//! | x |   |
//! +---+---+
//! ```

use std::fmt;

/// A grid of text cells, rendered column-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
    frame: bool,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows, frame: false }
    }

    /// Draw `+---+` rules between rows and `|` between cells.
    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }

    pub fn num_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.num_columns()];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
        write!(f, "+")?;
        for w in widths {
            write!(f, "{}+", "-".repeat(w + 2))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        if self.frame {
            Self::write_rule(f, &widths)?;
        }
        for row in &self.rows {
            let cells = widths.iter().enumerate().map(|(i, &w)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{cell:<w$}")
            });
            if self.frame {
                write!(f, "|")?;
                for cell in cells {
                    write!(f, " {cell} |")?;
                }
                writeln!(f)?;
                Self::write_rule(f, &widths)?;
            } else {
                let line = cells.collect::<Vec<_>>().join("  ");
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn framed_table_pads_columns() {
        let table = Table::new(cells(&[&["x", "ab"], &["x"]])).with_frame(true);
        assert_eq!(
            table.to_string(),
            "+---+----+\n| x | ab |\n+---+----+\n| x |    |\n+---+----+\n"
        );
    }

    #[test]
    fn unframed_table_trims_trailing_space() {
        let table = Table::new(cells(&[&["x", " "], &["x", "x"]]));
        assert_eq!(table.to_string(), "x\nx  x\n");
    }

    #[test]
    fn empty_table_renders_nothing_without_frame() {
        assert_eq!(Table::default().to_string(), "");
    }
}
