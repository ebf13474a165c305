// src/model/identity.rs
//
// The player page renders "Last, First Middle"; the category tables render
// "First Last". The canonical form is derived once and reused for every
// table lookup in the run.

/// Who we are scraping. Built once from the player page, never re-derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerIdentity {
    raw: String,
    canonical: String,
}

impl PlayerIdentity {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        Self { raw: s!(raw), canonical: canonical_name(raw) }
    }

    /// Name exactly as the profile page shows it.
    pub fn raw(&self) -> &str { &self.raw }

    /// "First Last", the key matched against a table's Player column.
    pub fn canonical(&self) -> &str { &self.canonical }
}

/// "Smith, John Michael" → "John Smith"; comma-free input is returned trimmed.
pub fn canonical_name(raw: &str) -> String {
    match raw.split_once(',') {
        Some((last, rest)) => {
            let first = rest.trim().split_whitespace().next().unwrap_or("");
            format!("{} {}", first, last)
        }
        None => s!(raw.trim()),
    }
}
