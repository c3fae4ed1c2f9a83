//! Collection statistics panel with bulk-action buttons.
//!
//! This module implements the `StatsPanel` component showing the owned
//! count and completion percentage alongside the Mark All and Clear
//! buttons, mirroring the top panel of the checklist.

use libadwaita::{
    gtk::{
        Align::{Center, End, Start},
        Box as GtkBox, Button, Label,
        Orientation::{Horizontal, Vertical},
    },
    prelude::BoxExt,
};

use crate::ui::utils::format_collection_progress;

/// Statistics panel with progress figure and bulk actions.
#[derive(Debug, Clone)]
pub struct StatsPanel {
    /// The panel container.
    pub widget: GtkBox,
    /// Progress label ("56/111 (50%)").
    pub progress_label: Label,
    /// Button that marks every volume as owned.
    pub mark_all_button: Button,
    /// Button that clears the whole collection.
    pub clear_button: Button,
}

impl StatsPanel {
    /// Creates a new stats panel.
    ///
    /// # Arguments
    ///
    /// * `owned` - Initial owned count.
    ///
    /// # Returns
    ///
    /// A new `StatsPanel` instance.
    pub fn new(owned: usize) -> Self {
        let widget = GtkBox::builder()
            .orientation(Horizontal)
            .spacing(12)
            .css_classes(["card"])
            .build();

        let figures = GtkBox::builder()
            .orientation(Vertical)
            .spacing(3)
            .hexpand(true)
            .margin_top(12)
            .margin_bottom(12)
            .margin_start(12)
            .build();

        let caption = Label::builder()
            .label("Collection")
            .halign(Start)
            .xalign(0.0)
            .css_classes(["dim-label"])
            .build();
        figures.append(&caption);

        let progress_label = Label::builder()
            .label(format_collection_progress(owned))
            .halign(Start)
            .xalign(0.0)
            .css_classes(["title-2"])
            .build();
        figures.append(&progress_label);

        widget.append(&figures);

        let buttons = GtkBox::builder()
            .orientation(Horizontal)
            .spacing(6)
            .halign(End)
            .valign(Center)
            .margin_end(12)
            .build();

        let mark_all_button = Button::builder()
            .label("Mark All")
            .css_classes(["suggested-action"])
            .tooltip_text("Mark every volume as owned")
            .build();
        buttons.append(&mark_all_button);

        let clear_button = Button::builder()
            .label("Clear")
            .tooltip_text("Unmark every volume")
            .build();
        buttons.append(&clear_button);

        widget.append(&buttons);

        Self {
            widget,
            progress_label,
            mark_all_button,
            clear_button,
        }
    }

    /// Updates the progress figure.
    ///
    /// # Arguments
    ///
    /// * `owned` - Current owned count.
    pub fn update(&self, owned: usize) {
        self.progress_label
            .set_label(&format_collection_progress(owned));
    }
}
