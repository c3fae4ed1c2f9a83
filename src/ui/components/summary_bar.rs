//! Missing-volume summary bar.
//!
//! Shows which volumes are still missing below the checklist grid. The bar
//! can be hidden from the preferences dialog.

use libadwaita::{
    gtk::{Align::Start, Box as GtkBox, Label, Orientation::Vertical},
    prelude::BoxExt,
};

use crate::ui::utils::format_missing_summary;

/// Summary bar listing the missing volumes.
#[derive(Debug, Clone)]
pub struct SummaryBar {
    /// The bar container.
    pub widget: GtkBox,
    /// The summary text label.
    pub label: Label,
}

impl SummaryBar {
    /// Creates a new summary bar.
    ///
    /// # Arguments
    ///
    /// * `missing` - Initial missing volume numbers.
    ///
    /// # Returns
    ///
    /// A new `SummaryBar` instance.
    pub fn new(missing: &[u16]) -> Self {
        let widget = GtkBox::builder()
            .orientation(Vertical)
            .css_classes(["card"])
            .build();

        let label = Label::builder()
            .label(format_missing_summary(missing))
            .halign(Start)
            .xalign(0.0)
            .wrap(true)
            .margin_top(12)
            .margin_bottom(12)
            .margin_start(12)
            .margin_end(12)
            .css_classes(["dim-label"])
            .build();
        widget.append(&label);

        Self { widget, label }
    }

    /// Updates the summary text.
    ///
    /// # Arguments
    ///
    /// * `missing` - Current missing volume numbers.
    pub fn update(&self, missing: &[u16]) {
        self.label.set_label(&format_missing_summary(missing));
    }
}

#[cfg(test)]
mod tests {
    use libadwaita::init;

    use crate::ui::components::summary_bar::SummaryBar;

    #[test]
    fn test_summary_bar_text_updates() {
        // Skip this test if we can't initialize GTK (e.g., in CI environments)
        if init().is_err() {
            return;
        }

        let bar = SummaryBar::new(&[1, 2]);
        assert_eq!(bar.label.label().as_str(), "Missing (2): 1, 2");

        bar.update(&[]);
        assert_eq!(bar.label.label().as_str(), "Missing (0): none");
    }
}
