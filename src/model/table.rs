// src/model/table.rs
//
// Accumulates merged seasons into one wide table. Columns are keyed by
// (category, column) so that e.g. Rushing "Yds" and Passing "Yds" stay
// apart; headers only carry the category when a name is ambiguous.

use std::collections::HashMap;

use super::category::Category;
use super::record::SeasonRecord;
use crate::data::DataSet;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnKey {
    pub category: Category,
    pub name: String,
}

#[derive(Clone, Debug, Default)]
pub struct ResultTable {
    columns: Vec<ColumnKey>,
    index: HashMap<ColumnKey, usize>,
    /// Rows may be shorter than `columns`; cells past the end are missing.
    rows: Vec<Vec<Option<String>>>,
    seasons: Vec<String>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Season label of every row, in row order.
    pub fn seasons(&self) -> &[String] {
        &self.seasons
    }

    /// Append one season; new columns are added on first sight.
    pub fn push(&mut self, record: SeasonRecord) {
        let season = s!(record.season());
        let mut row: Vec<Option<String>> = vec![None; self.columns.len()];

        for cell in record.into_cells() {
            let key = ColumnKey { category: cell.category, name: cell.column };
            let ix = match self.index.get(&key) {
                Some(&ix) => ix,
                None => {
                    let ix = self.columns.len();
                    self.index.insert(key.clone(), ix);
                    self.columns.push(key);
                    row.push(None);
                    ix
                }
            };
            // A repeated key within one record keeps its first value.
            if row[ix].is_none() {
                row[ix] = Some(cell.value);
            }
        }

        self.rows.push(row);
        self.seasons.push(season);
    }

    pub fn cell(&self, row: usize, category: Category, name: &str) -> Option<&str> {
        let key = ColumnKey { category, name: s!(name) };
        let ix = *self.index.get(&key)?;
        self.rows.get(row)?.get(ix)?.as_deref()
    }

    /// Pad every row to full width and replace absent or blank cells with `fill`.
    /// Running it again changes nothing.
    pub fn fill_missing(&mut self, fill: &str) {
        let width = self.columns.len();
        for row in &mut self.rows {
            row.resize(width, None);
            for cell in row.iter_mut() {
                let blank = cell.as_deref().is_none_or(|v| v.trim().is_empty());
                if blank {
                    *cell = Some(s!(fill));
                }
            }
        }
    }

    /// Display names: the bare column name, or "Category_name" when more than
    /// one category contributes the same name.
    pub fn headers(&self) -> Vec<String> {
        let mut seen: HashMap<&str, Category> = HashMap::new();
        let mut shared: Vec<&str> = Vec::new();
        for key in &self.columns {
            match seen.get(key.name.as_str()) {
                Some(&cat) if cat != key.category => shared.push(&key.name),
                Some(_) => {}
                None => { seen.insert(&key.name, key.category); }
            }
        }

        self.columns
            .iter()
            .map(|key| {
                if shared.contains(&key.name.as_str()) {
                    let prefix = key.category.label().replace(' ', "_");
                    join!(prefix, "_", &key.name)
                } else {
                    key.name.clone()
                }
            })
            .collect()
    }

    /// Frontend-neutral copy for display and export. Missing cells come out blank.
    pub fn to_dataset(&self) -> DataSet {
        let width = self.columns.len();
        let rows = self
            .rows
            .iter()
            .map(|r| {
                (0..width)
                    .map(|i| r.get(i).cloned().flatten().unwrap_or_default())
                    .collect()
            })
            .collect();
        DataSet { headers: Some(self.headers()), rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::{CategoryRow, CategoryRows};

    fn record(season: &str, cats: &[(Category, &[(&str, &str)])]) -> SeasonRecord {
        let mut rows = CategoryRows::default();
        for (cat, pairs) in cats {
            let fields = pairs.iter().map(|(k, v)| (s!(*k), s!(*v))).collect();
            rows.set(*cat, CategoryRow::from_fields(fields));
        }
        SeasonRecord::merge(season, rows)
    }

    #[test]
    fn columns_union_in_first_seen_order() {
        let mut t = ResultTable::new();
        t.push(record("2021", &[(Category::Rushing, &[("Yds", "5")])]));
        t.push(record("2022", &[
            (Category::Rushing, &[("Yds", "7")]),
            (Category::Tackles, &[("Solo", "3")]),
        ]));

        assert_eq!(t.row_count(), 2);
        assert_eq!(t.column_count(), 3);
        assert_eq!(t.headers(), vec!["Yds", "Season", "Solo"]);
        assert_eq!(t.cell(0, Category::Tackles, "Solo"), None);
        assert_eq!(t.cell(1, Category::Tackles, "Solo"), Some("3"));
        assert_eq!(t.seasons(), &[s!("2021"), s!("2022")]);
    }

    #[test]
    fn fill_missing_pads_and_is_idempotent() {
        let mut t = ResultTable::new();
        t.push(record("2021", &[(Category::Rushing, &[("Yds", "")])]));
        t.push(record("2022", &[(Category::Passing, &[("Att", "30")])]));

        t.fill_missing("0");
        let once = t.to_dataset();
        t.fill_missing("0");
        let twice = t.to_dataset();

        assert_eq!(once, twice);
        assert_eq!(once.rows[0], vec!["0", "2021", "0"]);
        assert_eq!(once.rows[1], vec!["0", "2022", "30"]);
    }

    #[test]
    fn shared_names_are_qualified_by_category() {
        let mut t = ResultTable::new();
        t.push(record("2023", &[
            (Category::Rushing, &[("Player", "John Smith"), ("Yds", "50")]),
            (Category::Passing, &[("Player", "John Smith"), ("Yds", "300")]),
            (Category::PassesDefended, &[("PBU", "1")]),
        ]));
        assert_eq!(
            t.headers(),
            vec!["Rushing_Player", "Rushing_Yds", "Season", "Passing_Player", "Passing_Yds", "PBU"]
        );
    }

    #[test]
    fn empty_table_has_no_rows() {
        let mut t = ResultTable::new();
        t.fill_missing("0");
        assert!(t.is_empty());
        assert!(t.to_dataset().rows.is_empty());
    }
}
