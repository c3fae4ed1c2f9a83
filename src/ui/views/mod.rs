//! Top-level checklist views.

pub mod checklist_view;

pub use checklist_view::{ChecklistView, ChecklistViewBuilder};
