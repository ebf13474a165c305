// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific readers for the stats site. Each spec knows *where the ground
//! truth lives in the HTML* of one kind of page and how to pull it out.
//!
//! ## What lives here
//! - **Pure HTML reading** over `core::html::Document` (selectors, exact link
//!   text, header positions).
//! - **Light shaping** of results into the typed records in `model`.
//! - The fetch-then-parse helpers for the later hops (`team::locate`,
//!   `category::extract`), so each hop stays testable against a fake fetcher.
//!
//! ## What does **not** live here
//! - **Run policy** (which failures skip a season, the presence gate, zero
//!   fill) – that belongs to `scrape`.
//! - **GUI or export concerns.**
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::collect_player_stats → specs::player   (once)
//!                                          → specs::team     (per season)
//!                                          → specs::category (×8 per season)
//! ```
//!
//! ## Testing notes
//! Every reader has a `parse`-style entry taking a `Document`, so tests run
//! offline against inline HTML snippets.
pub mod category;
pub mod player;
pub mod team;
