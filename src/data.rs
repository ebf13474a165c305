// src/data.rs
//
// Plain headers + rows, the shape the GUI table and the exporters consume.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
