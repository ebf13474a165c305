// src/model/record.rs
//
// Per-season building blocks: where a season lives (SeasonLink), where each
// category table lives (CategoryLinks), the player's row in one table
// (CategoryRow), and the wide record merged from all eight (SeasonRecord).

use url::Url;

use super::category::{Category, PerCategory};
use crate::config::consts::SEASON_COLUMN;

/// One Year/Team row of the player page that carries a team link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonLink {
    pub season: String,
    pub team_url: Url,
}

/// Category table URLs for one season; `None` = the page had no such link.
pub type CategoryLinks = PerCategory<Option<Url>>;

/// The player's row in one category table, column names already normalized.
/// Empty means "no data for this category", never an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryRow {
    fields: Vec<(String, String)>,
}

impl CategoryRow {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v.as_str())
    }
}

pub type CategoryRows = PerCategory<CategoryRow>;

impl CategoryRows {
    /// Both anchor categories must have produced a row for the season to count.
    pub fn passes_gate(&self) -> bool {
        !self.get(Category::Rushing).is_empty() && !self.get(Category::Passing).is_empty()
    }
}

/// One cell of a merged season: which category it came from, its column, its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub category: Category,
    pub column: String,
    pub value: String,
}

/// One season, all categories side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonRecord {
    season: String,
    cells: Vec<Cell>,
}

impl SeasonRecord {
    /// Lay the eight rows out in category order. The season label rides on the
    /// Rushing slot, after its own columns, and replaces any `Season` column
    /// the Rushing table brought along. Empty slots contribute nothing.
    pub fn merge(season: &str, rows: CategoryRows) -> Self {
        let mut cells = Vec::new();
        for (category, row) in rows.into_entries() {
            let rushing = category == Category::Rushing;
            for (column, value) in row.fields {
                if rushing && column == SEASON_COLUMN {
                    continue;
                }
                cells.push(Cell { category, column, value });
            }
            if rushing {
                cells.push(Cell {
                    category,
                    column: s!(SEASON_COLUMN),
                    value: s!(season),
                });
            }
        }
        Self { season: s!(season), cells }
    }

    pub fn season(&self) -> &str {
        &self.season
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn value(&self, category: Category, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.category == category && c.column == column)
            .map(|c| c.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> CategoryRow {
        CategoryRow::from_fields(pairs.iter().map(|(k, v)| (s!(*k), s!(*v))).collect())
    }

    #[test]
    fn gate_needs_rushing_and_passing() {
        let mut rows = CategoryRows::default();
        assert!(!rows.passes_gate());
        rows.set(Category::Rushing, row(&[("Rush_Yds", "10")]));
        assert!(!rows.passes_gate());
        rows.set(Category::Passing, row(&[("Pass_Yds", "200")]));
        assert!(rows.passes_gate());
        rows.set(Category::Rushing, CategoryRow::empty());
        assert!(!rows.passes_gate());
    }

    #[test]
    fn merge_orders_by_category_and_injects_season_after_rushing() {
        let mut rows = CategoryRows::default();
        rows.set(Category::Tackles, row(&[("Solo", "4")]));
        rows.set(Category::Passing, row(&[("Player", "John Smith"), ("Pass_Yds", "200")]));
        rows.set(Category::Rushing, row(&[("Player", "John Smith"), ("Rush_Yds", "10")]));

        let rec = SeasonRecord::merge("2023-24", rows);
        let order: Vec<(Category, &str)> =
            rec.cells().iter().map(|c| (c.category, c.column.as_str())).collect();
        assert_eq!(order, vec![
            (Category::Rushing, "Player"),
            (Category::Rushing, "Rush_Yds"),
            (Category::Rushing, "Season"),
            (Category::Passing, "Player"),
            (Category::Passing, "Pass_Yds"),
            (Category::Tackles, "Solo"),
        ]);
        assert_eq!(rec.value(Category::Rushing, "Season"), Some("2023-24"));
        assert_eq!(rec.season(), "2023-24");
    }

    #[test]
    fn injected_season_replaces_rushing_season_column() {
        let mut rows = CategoryRows::default();
        rows.set(Category::Rushing, row(&[("Season", "Career"), ("Rush_Yds", "80")]));
        rows.set(Category::Passing, row(&[("Season", "Career"), ("Pass_Yds", "200")]));

        let rec = SeasonRecord::merge("2022-23", rows);
        assert_eq!(rec.value(Category::Rushing, "Season"), Some("2022-23"));
        let rushing: Vec<&str> = rec
            .cells()
            .iter()
            .filter(|c| c.category == Category::Rushing)
            .map(|c| c.column.as_str())
            .collect();
        assert_eq!(rushing, vec!["Rush_Yds", "Season"]);
        // Other categories keep their own Season column untouched.
        assert_eq!(rec.value(Category::Passing, "Season"), Some("Career"));
    }

    #[test]
    fn empty_slots_add_no_columns() {
        let mut rows = CategoryRows::default();
        rows.set(Category::Rushing, row(&[("Rush_Yds", "1")]));
        rows.set(Category::Passing, row(&[("Pass_Yds", "2")]));
        let rec = SeasonRecord::merge("2022-23", rows);
        assert_eq!(rec.cells().len(), 3);
        assert!(rec.cells().iter().all(|c| matches!(c.category, Category::Rushing | Category::Passing)));
    }
}
