//! Checklist view with search and the volume grid.
//!
//! This module implements the `ChecklistView` component: the stats panel,
//! the action row, the search entry, and the `FlowBox` grid of 111 volume
//! cells, reactive to both collection changes and search-filter changes.

use std::{rc::Rc, sync::Arc};

use libadwaita::{
    glib::MainContext,
    gtk::{
        Align::Start,
        Box as GtkBox, Entry, FlowBox, InputPurpose, Label,
        Orientation::Vertical,
        ScrolledWindow,
        SelectionMode::None as SelectionNone,
        Widget,
    },
    prelude::{BoxExt, ButtonExt, Cast, EditableExt, WidgetExt},
};

use crate::{
    collection::{filter::QuerySanitizer, set::all_volumes},
    state::{
        AppState, AppStateEvent, CollectionManager,
        collection_manager::CollectionEvent::OwnedChanged,
    },
    ui::components::{ChecklistActions, EmptyState, StatsPanel, SummaryBar, VolumeCell},
};

/// Builder pattern for configuring ChecklistView components.
#[derive(Default)]
pub struct ChecklistViewBuilder {
    app_state: Option<Arc<AppState>>,
    collection: Option<Arc<CollectionManager>>,
    show_missing_summary: bool,
}

impl ChecklistViewBuilder {
    /// Sets the application state for reactive filter updates.
    ///
    /// # Arguments
    ///
    /// * `app_state` - Application state reference
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn app_state(mut self, app_state: Arc<AppState>) -> Self {
        self.app_state = Some(app_state);
        self
    }

    /// Sets the collection manager driving the checklist.
    ///
    /// # Arguments
    ///
    /// * `collection` - Collection manager reference
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn collection(mut self, collection: Arc<CollectionManager>) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Configures whether the missing-volume summary starts visible.
    ///
    /// # Arguments
    ///
    /// * `show_missing_summary` - Initial summary visibility
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn show_missing_summary(mut self, show_missing_summary: bool) -> Self {
        self.show_missing_summary = show_missing_summary;
        self
    }

    /// Builds the ChecklistView component.
    ///
    /// # Returns
    ///
    /// A new `ChecklistView` instance.
    pub fn build(self) -> ChecklistView {
        ChecklistView::new(self.app_state, self.collection, self.show_missing_summary)
    }
}

/// Main checklist view for the volume collection.
///
/// The `ChecklistView` renders one check-button cell per volume in the
/// series and keeps them in sync with the collection manager. Search
/// queries hide non-matching cells; when nothing matches, an empty state
/// replaces the grid.
pub struct ChecklistView {
    /// The outer GTK widget.
    pub widget: Widget,
    /// The search entry.
    pub search_entry: Entry,
    /// The flow box holding the volume cells.
    pub flow_box: FlowBox,
    /// Stats panel with progress and bulk actions.
    pub stats_panel: StatsPanel,
    /// Secondary action row (invert, copy, export, import).
    pub actions: ChecklistActions,
    /// Missing-volume summary bar.
    pub summary_bar: SummaryBar,
    /// Empty state for unmatched queries.
    pub empty_state: EmptyState,
    /// One cell per volume, in series order.
    pub cells: Rc<Vec<VolumeCell>>,
    /// Application state reference.
    pub app_state: Option<Arc<AppState>>,
    /// Collection manager reference.
    pub collection: Option<Arc<CollectionManager>>,
}

impl ChecklistView {
    /// Returns a builder for configuring the view.
    #[must_use]
    pub fn builder() -> ChecklistViewBuilder {
        ChecklistViewBuilder::default()
    }

    /// Creates a new ChecklistView component.
    ///
    /// # Arguments
    ///
    /// * `app_state` - Optional application state for filter updates
    /// * `collection` - Optional collection manager driving the cells
    /// * `show_missing_summary` - Initial summary visibility
    ///
    /// # Returns
    ///
    /// A new `ChecklistView` instance.
    pub fn new(
        app_state: Option<Arc<AppState>>,
        collection: Option<Arc<CollectionManager>>,
        show_missing_summary: bool,
    ) -> Self {
        let snapshot = collection
            .as_ref()
            .map(|manager| manager.snapshot())
            .unwrap_or_default();

        let stats_panel = StatsPanel::new(snapshot.len());
        let actions = ChecklistActions::new();

        // Volume numbers are the only meaningful query, so hint digit input
        let search_entry = Entry::builder()
            .input_purpose(InputPurpose::Digits)
            .primary_icon_name("system-search-symbolic")
            .placeholder_text("Search volume")
            .build();

        let search_hint = Label::builder()
            .label("Tip: type \"10\" to match 10, 100, 101...")
            .halign(Start)
            .xalign(0.0)
            .css_classes(["dim-label", "caption"])
            .build();

        let search_box = GtkBox::builder().orientation(Vertical).spacing(3).build();
        search_box.append(&search_entry);
        search_box.append(&search_hint);

        // One cell per volume, created once; filtering only toggles
        // visibility
        let flow_box = FlowBox::builder()
            .selection_mode(SelectionNone)
            .min_children_per_line(2)
            .max_children_per_line(6)
            .row_spacing(6)
            .column_spacing(6)
            .homogeneous(true)
            .build();

        let cells: Rc<Vec<VolumeCell>> = Rc::new(
            all_volumes()
                .map(|number| {
                    let cell = VolumeCell::new(number, snapshot.contains(number));
                    flow_box.append(&cell.child);
                    cell
                })
                .collect(),
        );

        if let Some(manager) = &collection {
            for cell in cells.iter() {
                let manager = manager.clone();
                cell.connect_toggled(move |number, active| {
                    manager.set_owned(number, active);
                });
            }
        }

        let scroller = ScrolledWindow::builder()
            .child(&flow_box)
            .vexpand(true)
            .build();

        let summary_bar = SummaryBar::new(&snapshot.missing());
        summary_bar.widget.set_visible(show_missing_summary);

        let empty_state = EmptyState::new();

        let container = GtkBox::builder()
            .orientation(Vertical)
            .spacing(12)
            .margin_top(12)
            .margin_bottom(12)
            .margin_start(12)
            .margin_end(12)
            .build();
        container.append(&stats_panel.widget);
        container.append(&actions.widget);
        container.append(&search_box);
        container.append(&scroller);
        container.append(&empty_state.widget);
        container.append(&summary_bar.widget);

        let view = Self {
            widget: container.upcast::<Widget>(),
            search_entry,
            flow_box,
            stats_panel,
            actions,
            summary_bar,
            empty_state,
            cells,
            app_state,
            collection,
        };

        view.connect_bulk_actions();
        view.connect_search_entry();
        view.subscribe_to_collection();
        view.subscribe_to_app_state();

        view
    }

    /// Applies a sanitized query to the cells and the empty state.
    ///
    /// # Arguments
    ///
    /// * `query` - Sanitized (digits-only) query.
    ///
    /// # Returns
    ///
    /// The number of visible cells after the update.
    pub fn apply_query(&self, query: &str) -> usize {
        apply_query_to(&self.cells, &self.empty_state, query)
    }

    /// Wires the Mark All, Clear, and Invert buttons to the manager.
    fn connect_bulk_actions(&self) {
        let Some(manager) = &self.collection else {
            return;
        };

        let mark_all_manager = manager.clone();
        self.stats_panel.mark_all_button.connect_clicked(move |_| {
            mark_all_manager.mark_all();
        });

        let clear_manager = manager.clone();
        self.stats_panel.clear_button.connect_clicked(move |_| {
            clear_manager.clear();
        });

        let invert_manager = manager.clone();
        self.actions.invert_button.connect_clicked(move |_| {
            invert_manager.invert();
        });
    }

    /// Forwards sanitized search text into the application state.
    fn connect_search_entry(&self) {
        let Some(app_state) = &self.app_state else {
            return;
        };

        let sanitizer = QuerySanitizer::new();
        let app_state = app_state.clone();
        self.search_entry.connect_changed(move |entry| {
            let query = sanitizer.sanitize(entry.text().as_str());
            app_state.update_search_filter(Some(query));
        });
    }

    /// Keeps cells, stats, and summary in sync with the collection.
    fn subscribe_to_collection(&self) {
        let Some(manager) = &self.collection else {
            return;
        };

        let rx = manager.subscribe();
        let cells = self.cells.clone();
        let stats_panel = self.stats_panel.clone();
        let summary_bar = self.summary_bar.clone();

        MainContext::default().spawn_local(async move {
            while let Ok(OwnedChanged(snapshot)) = rx.recv().await {
                for cell in cells.iter() {
                    cell.set_owned(snapshot.contains(cell.number));
                }
                stats_panel.update(snapshot.len());
                summary_bar.update(&snapshot.missing());
            }
        });
    }

    /// Reacts to search-filter and summary-visibility changes.
    fn subscribe_to_app_state(&self) {
        let Some(app_state) = &self.app_state else {
            return;
        };

        let mut rx = app_state.subscribe();
        let cells = self.cells.clone();
        let empty_state = self.empty_state.clone();
        let summary_widget = self.summary_bar.widget.clone();

        MainContext::default().spawn_local(async move {
            while let Ok(event) = rx.recv().await {
                match event {
                    AppStateEvent::SearchFilterChanged(filter) => {
                        apply_query_to(&cells, &empty_state, filter.as_deref().unwrap_or(""));
                    }
                    AppStateEvent::SummaryVisibilityChanged(visible) => {
                        summary_widget.set_visible(visible);
                    }
                }
            }
        });
    }
}

/// Shows the cells matching `query` and updates the empty state.
fn apply_query_to(cells: &[VolumeCell], empty_state: &EmptyState, query: &str) -> usize {
    let mut match_count = 0;
    for cell in cells {
        if cell.apply_query(query) {
            match_count += 1;
        }
    }
    empty_state.update_for_match_count(match_count);
    match_count
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use {
        libadwaita::{init, prelude::CheckButtonExt},
        tempfile::tempdir,
    };

    use crate::{
        collection::{set::SERIES_TOTAL, store::CollectionStore},
        state::{AppState, CollectionManager},
        ui::views::checklist_view::ChecklistView,
    };

    fn view_in(dir: &tempfile::TempDir) -> ChecklistView {
        let manager = Arc::new(CollectionManager::new(CollectionStore::with_state_path(
            dir.path().join("collection.json"),
        )));
        manager.toggle(7);

        ChecklistView::builder()
            .app_state(Arc::new(AppState::default()))
            .collection(manager)
            .show_missing_summary(true)
            .build()
    }

    #[test]
    fn test_checklist_view_creates_a_cell_per_volume() {
        // Skip this test if we can't initialize GTK (e.g., in CI environments)
        if init().is_err() {
            return;
        }

        let dir = tempdir().unwrap();
        let view = view_in(&dir);
        assert_eq!(view.cells.len(), usize::from(SERIES_TOTAL));
        assert!(view.cells[6].check.is_active());
        assert!(!view.cells[0].check.is_active());
    }

    #[test]
    fn test_apply_query_hides_non_matching_cells() {
        if init().is_err() {
            return;
        }

        let dir = tempdir().unwrap();
        let view = view_in(&dir);

        assert_eq!(view.apply_query("111"), 1);
        assert_eq!(view.apply_query("999"), 0);
        assert_eq!(view.apply_query(""), usize::from(SERIES_TOTAL));
    }
}
