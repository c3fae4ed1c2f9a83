//! Single checklist cell for one volume.
//!
//! This module implements the `VolumeCell` component: a check button inside
//! a `FlowBoxChild`, labelled with the padded volume number.

use libadwaita::{
    gtk::{CheckButton, FlowBoxChild},
    prelude::{CheckButtonExt, WidgetExt},
};

use crate::{collection::filter::volume_matches, ui::utils::volume_label};

/// Check-button cell for a single volume in the checklist grid.
#[derive(Debug, Clone)]
pub struct VolumeCell {
    /// The flow box child wrapping the check button.
    pub child: FlowBoxChild,
    /// The check button itself.
    pub check: CheckButton,
    /// Volume number this cell represents.
    pub number: u16,
}

impl VolumeCell {
    /// Creates a new cell for a volume.
    ///
    /// # Arguments
    ///
    /// * `number` - Volume number for this cell.
    /// * `owned` - Initial ownership state.
    ///
    /// # Returns
    ///
    /// A new `VolumeCell` instance.
    pub fn new(number: u16, owned: bool) -> Self {
        let check = CheckButton::builder()
            .label(volume_label(number))
            .active(owned)
            .build();

        let child = FlowBoxChild::builder().child(&check).build();

        Self {
            child,
            check,
            number,
        }
    }

    /// Connects a handler for user toggles.
    ///
    /// The callback receives the volume number and the new active state.
    /// Programmatic updates through [`VolumeCell::set_owned`] also fire this
    /// signal, so the callback must be level-triggered (write the state, not
    /// flip it).
    ///
    /// # Arguments
    ///
    /// * `callback` - Handler invoked on every toggle.
    pub fn connect_toggled<F>(&self, callback: F)
    where
        F: Fn(u16, bool) + 'static,
    {
        let number = self.number;
        self.check.connect_toggled(move |button| {
            callback(number, button.is_active());
        });
    }

    /// Writes the check state without redundant signal churn.
    ///
    /// # Arguments
    ///
    /// * `owned` - Whether the volume is owned.
    pub fn set_owned(&self, owned: bool) {
        if self.check.is_active() != owned {
            self.check.set_active(owned);
        }
    }

    /// Shows or hides the cell for a sanitized search query.
    ///
    /// # Arguments
    ///
    /// * `query` - Sanitized (digits-only) query.
    ///
    /// # Returns
    ///
    /// `true` if the cell is visible after the update.
    pub fn apply_query(&self, query: &str) -> bool {
        let visible = volume_matches(self.number, query);
        self.child.set_visible(visible);
        visible
    }
}

#[cfg(test)]
mod tests {
    use libadwaita::{
        init,
        prelude::{CheckButtonExt, WidgetExt},
    };

    use crate::ui::components::volume_cell::VolumeCell;

    #[test]
    fn test_volume_cell_label_and_state() {
        // Skip this test if we can't initialize GTK (e.g., in CI environments)
        if init().is_err() {
            return;
        }

        let cell = VolumeCell::new(7, true);
        assert_eq!(cell.check.label().as_deref(), Some("Vol. 007"));
        assert!(cell.check.is_active());

        cell.set_owned(false);
        assert!(!cell.check.is_active());
    }

    #[test]
    fn test_apply_query_controls_visibility() {
        if init().is_err() {
            return;
        }

        let cell = VolumeCell::new(42, false);
        assert!(cell.apply_query("4"));
        assert!(cell.child.is_visible());

        assert!(!cell.apply_query("9"));
        assert!(!cell.child.is_visible());
    }
}
