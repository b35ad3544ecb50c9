/// Pipe table block type: row detection and cell splitting.
pub struct Table;

/// Header row plus data rows produced by [`Table::split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCells {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub const PIPE: char = '|';
    /// A table needs a header and at least one more line besides the separator.
    pub const MIN_LINES: usize = 2;

    /// A table row starts and ends with a pipe once trimmed.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// A header/body separator row: only pipes, dashes, colons and
    /// whitespace, with at least one dash.
    pub fn is_separator(line: &str) -> bool {
        Self::is_row(line)
            && line.contains('-')
            && line
                .chars()
                .all(|c| c == Self::PIPE || c == '-' || c == ':' || c.is_whitespace())
    }

    /// Splits one row into trimmed cells, discarding the empty cells created
    /// by the row's own leading and trailing pipes.
    pub fn cells(line: &str) -> Vec<String> {
        let parts: Vec<&str> = line.trim().split(Self::PIPE).collect();
        if parts.len() <= 2 {
            return vec![];
        }
        parts[1..parts.len() - 1]
            .iter()
            .map(|c| c.trim().to_string())
            .collect()
    }

    /// Splits the accumulated non-separator lines into a header and rows.
    ///
    /// Data lines that produce no cells are dropped rather than kept as
    /// empty rows. Returns `None` when there are too few lines for a table.
    pub fn split(lines: &[&str]) -> Option<TableCells> {
        if lines.len() < Self::MIN_LINES {
            return None;
        }
        let header = Self::cells(lines[0]);
        let rows = lines[1..]
            .iter()
            .map(|l| Self::cells(l))
            .filter(|cells| !cells.is_empty())
            .collect();
        Some(TableCells { header, rows })
    }
}
