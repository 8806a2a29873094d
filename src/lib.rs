//! VocabWall Library
//!
//! Core functionality for the VocabWall exporter: grid layout and font
//! heuristics, theme palettes, poster and flash-card composition, Google
//! Sheet ingestion, and SVG/HTML/ZIP export.
//!
//! The composition core ([`layout`], [`theme`], [`poster`], [`cards`]) is
//! pure: no I/O, no shared state, safe to call concurrently. I/O lives at
//! the edges in [`sheet`] and [`export`].

// Module declarations
pub mod cards;
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod layout;
pub mod models;
pub mod poster;
pub mod sheet;
pub mod theme;
