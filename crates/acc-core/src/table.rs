use std::fmt;

/// A single table cell after numeric inference.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Infer a cell from its raw text.
    ///
    /// Whitespace runs collapse to a single space and `,` is treated as a
    /// thousands separator, so `"2,000"` becomes `Integer(2000)`.
    pub fn parse(raw: &str) -> Self {
        let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let digits: String = text.chars().filter(|c| *c != ',').collect();

        if let Ok(value) = digits.parse::<i64>() {
            return Cell::Integer(value);
        }

        match digits.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Float(value),
            _ => Cell::Text(text),
        }
    }

    /// Integer value of the cell, if it holds a whole number.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(value) => Some(*value),
            Cell::Float(value)
                if value.fract() == 0.0
                    && *value >= i64::MIN as f64
                    && *value <= i64::MAX as f64 =>
            {
                Some(*value as i64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(value) => write!(f, "{value}"),
            Cell::Float(value) => write!(f, "{value}"),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

/// One data row, cells in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }
}

/// Data rows of the published limit table, header rows excluded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionLimitTable {
    pub rows: Vec<TableRow>,
}

impl ConnectionLimitTable {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    /// Build a two-column table from `(label, limit)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let rows = pairs
            .into_iter()
            .map(|(label, limit)| TableRow::new(vec![Cell::from(label), Cell::from(limit)]))
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
