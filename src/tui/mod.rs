//! Event-driven terminal UI (ratatui over crossterm).

pub mod app;
pub mod controller;
pub mod ui;
