// src/export/mod.rs

//! Export surfaces for external collaborators.
//!
//! Only the spreadsheet grid lives here; PNG export is a rasterization of
//! the rendered chart and stays entirely on the renderer's side.

pub mod spreadsheet;

pub use spreadsheet::{spreadsheet_grid, CellStyle, Sheet, SheetCell};
