use crate::di::traits::BusyIndicator;

/// Shows a busy indicator for one attempt and dismisses it exactly once
///
/// Dismissal happens on [`BusyGuard::dismiss`] or on drop, whichever comes
/// first, and is skipped when the indicator's context is already gone.
pub struct BusyGuard<'a> {
    indicator: &'a dyn BusyIndicator,
    dismissed: bool,
}

impl<'a> BusyGuard<'a> {
    pub fn show(indicator: &'a dyn BusyIndicator, message: &str) -> Self {
        indicator.show(message);
        Self {
            indicator,
            dismissed: false,
        }
    }

    pub fn dismiss(mut self) {
        self.dismiss_once();
    }

    fn dismiss_once(&mut self) {
        if self.dismissed {
            return;
        }
        self.dismissed = true;
        if self.indicator.is_attached() {
            self.indicator.dismiss();
        } else {
            tracing::debug!("busy indicator context is gone, skipping dismissal");
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.dismiss_once();
    }
}
