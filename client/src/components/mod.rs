//! Reusable UI component modules.

pub mod theme_toggle;
