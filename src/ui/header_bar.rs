//! Application header bar.
//!
//! This module implements the header bar with the window title and the
//! preferences button. The search entry lives in the checklist view itself,
//! next to the grid it filters.

use libadwaita::{HeaderBar as LibadwaitaHeaderBar, WindowTitle, gtk::Button};

/// Basic header bar with essential controls.
pub struct HeaderBar {
    /// The underlying Libadwaita header bar widget.
    pub widget: LibadwaitaHeaderBar,
    /// Preferences button.
    pub preferences_button: Button,
}

impl HeaderBar {
    /// Creates a new header bar instance.
    ///
    /// # Returns
    ///
    /// A new `HeaderBar` instance.
    pub fn new() -> Self {
        let widget = LibadwaitaHeaderBar::builder().build();

        let title = WindowTitle::new("Oxshelf", "Volume checklist");
        widget.set_title_widget(Some(&title));

        // Preferences button
        let preferences_button = Button::builder()
            .icon_name("preferences-system-symbolic")
            .tooltip_text("Preferences")
            .build();
        widget.pack_end(&preferences_button);

        Self {
            widget,
            preferences_button,
        }
    }
}

impl Default for HeaderBar {
    fn default() -> Self {
        Self::new()
    }
}
