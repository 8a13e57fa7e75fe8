use std::collections::BTreeMap;

/// Delimiter actually used to split a row. Tab is the primary strategy;
/// comma is a per-row fallback that only activates when the whole paste
/// contains no tabs at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
}

#[derive(Debug, Clone)]
pub struct Row {
    /// Trimmed cells in column order. Empty string means "absent".
    pub cells: Vec<String>,
    pub delimiter: Delimiter,
}

#[derive(Debug, Clone)]
pub struct Table {
    pub rows: Vec<Row>,
    /// Overall detected delimiter: `Comma` when the comma fallback fired
    /// for at least one row, `Tab` otherwise.
    pub delimiter: Delimiter,
}

impl Table {
    /// Row length to occurrence count. Counts sum to `rows.len()`.
    pub fn column_count_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for row in &self.rows {
            *histogram.entry(row.cells.len()).or_insert(0) += 1;
        }
        histogram
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A line is blank when nothing but spaces and carriage returns remain.
/// Tabs are structure, not whitespace: a line of only tabs is a row of
/// empty cells and must survive to the validator.
fn is_blank_line(line: &str) -> bool {
    line.trim_matches([' ', '\r']).is_empty()
}

/// Split raw pasted text into rows and cells.
///
/// Rows split on tab first. When no row in the entire paste contains a tab,
/// every comma-bearing row is re-split on comma instead; rows without
/// commas keep their single cell. Fully empty input yields an empty table,
/// never an error.
pub fn tokenize(text: &str) -> Table {
    let mut rows: Vec<Row> = text
        .lines()
        .filter(|line| !is_blank_line(line))
        .map(|line| Row {
            cells: line.split('\t').map(|c| c.trim().to_string()).collect(),
            delimiter: Delimiter::Tab,
        })
        .collect();

    let any_tabs = rows.iter().any(|r| r.cells.len() > 1);
    let mut comma_fallback = false;
    if !any_tabs {
        for row in &mut rows {
            if row.cells.len() == 1 && row.cells[0].contains(',') {
                row.cells = row.cells[0]
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .collect();
                row.delimiter = Delimiter::Comma;
                comma_fallback = true;
            }
        }
    }

    Table {
        rows,
        delimiter: if comma_fallback {
            Delimiter::Comma
        } else {
            Delimiter::Tab
        },
    }
}
