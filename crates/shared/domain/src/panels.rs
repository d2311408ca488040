use serde::Serialize;

/// Dashboard panels a variant switches on and off.
///
/// The two lists must be disjoint; panels in neither list keep the host's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelVisibility {
    pub enabled: &'static [&'static str],
    pub disabled: &'static [&'static str],
}

impl PanelVisibility {
    #[must_use]
    pub fn is_disjoint(&self) -> bool {
        self.overlap().next().is_none()
    }

    /// Panel ids present in both lists.
    pub fn overlap(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.enabled.iter().copied().filter(|id| self.disabled.contains(id))
    }

    /// `Some(true)` if enabled, `Some(false)` if disabled, `None` if the variant has no opinion.
    #[must_use]
    pub fn visibility(&self, panel: &str) -> Option<bool> {
        if self.enabled.contains(&panel) {
            Some(true)
        } else if self.disabled.contains(&panel) {
            Some(false)
        } else {
            None
        }
    }
}
