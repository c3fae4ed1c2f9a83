//! Empty state shown when no volume matches the search query.

use libadwaita::{
    gtk::{
        Align::{Center, Fill},
        Box as GtkBox, Label,
        Orientation::Vertical,
        Widget,
    },
    prelude::{BoxExt, Cast, WidgetExt},
};

/// Placeholder displayed when the search filter matches nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// The outer widget container.
    pub widget: Widget,
    /// Message label.
    pub message_label: Label,
}

impl EmptyState {
    /// Creates a new empty state component, initially hidden.
    ///
    /// # Returns
    ///
    /// A new `EmptyState` instance.
    pub fn new() -> Self {
        let message_label = Label::builder()
            .label("No volumes match")
            .halign(Center)
            .valign(Center)
            .css_classes(["title-2"])
            .build();

        let description_label = Label::builder()
            .label("Try a different volume number")
            .halign(Center)
            .valign(Center)
            .css_classes(["dim-label"])
            .build();

        let container = GtkBox::builder()
            .orientation(Vertical)
            .halign(Center)
            .valign(Center)
            .spacing(6)
            .margin_top(48)
            .margin_bottom(48)
            .build();
        container.append(&message_label);
        container.append(&description_label);

        let widget = GtkBox::builder()
            .orientation(Vertical)
            .halign(Fill)
            .valign(Fill)
            .visible(false)
            .build();
        widget.append(&container);

        Self {
            widget: widget.upcast::<Widget>(),
            message_label,
        }
    }

    /// Shows the placeholder exactly when nothing matches.
    ///
    /// # Arguments
    ///
    /// * `match_count` - Number of volumes matching the current query.
    pub fn update_for_match_count(&self, match_count: usize) {
        self.widget.set_visible(match_count == 0);
    }
}

impl Default for EmptyState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use libadwaita::{init, prelude::WidgetExt};

    use crate::ui::components::empty_state::EmptyState;

    #[test]
    fn test_empty_state_visibility_follows_match_count() {
        // Skip this test if we can't initialize GTK (e.g., in CI environments)
        if init().is_err() {
            return;
        }

        let empty_state = EmptyState::new();
        assert!(!empty_state.widget.is_visible());

        empty_state.update_for_match_count(0);
        assert!(empty_state.widget.is_visible());

        empty_state.update_for_match_count(12);
        assert!(!empty_state.widget.is_visible());
    }
}
