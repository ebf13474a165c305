// src/report.rs
//
// What a run hands back to its caller: the table plus every non-fatal problem
// met along the way. Frontends decide how to show the warnings.

use std::fmt;

use crate::model::{Category, PlayerIdentity, ResultTable};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// The n-th season table on the player page (0-based).
    SeasonTable(usize),
    Season(String),
    Category { season: String, category: Category },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub scope: Scope,
    pub message: String,
}

impl Diagnostic {
    pub fn new(scope: Scope, message: impl Into<String>) -> Self {
        Self { scope, message: message.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Scope::SeasonTable(n) => write!(f, "Season table {}: {}", n + 1, self.message),
            Scope::Season(season) => write!(f, "Season {}: {}", season, self.message),
            Scope::Category { season, category } => {
                write!(f, "Season {} / {}: {}", season, category, self.message)
            }
        }
    }
}

#[derive(Debug)]
pub struct StatsReport {
    pub player: PlayerIdentity,
    /// Seasons found on the player page, before any filtering.
    pub seasons_found: usize,
    /// Zero-filled; empty means "no stats found".
    pub table: ResultTable,
    pub warnings: Vec<Diagnostic>,
}

impl StatsReport {
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
