//! Reusable checklist UI components.

pub mod actions;
pub mod empty_state;
pub mod stats_panel;
pub mod summary_bar;
pub mod volume_cell;

pub use {
    actions::ChecklistActions, empty_state::EmptyState, stats_panel::StatsPanel,
    summary_bar::SummaryBar, volume_cell::VolumeCell,
};
