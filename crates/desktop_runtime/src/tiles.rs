//! Feature-tile chips on the home window: hover previews a panel, click locks it, Escape
//! dismisses.

/// Delay before a hover preview hides after the pointer leaves its chip.
pub const TILE_HIDE_DELAY_MS: u64 = 120;

/// Which tile panel is visible and whether a click pinned it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTileState {
    shown: Option<String>,
    locked: Option<String>,
}

impl FeatureTileState {
    pub fn shown(&self) -> Option<&str> {
        self.shown.as_deref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.shown() == Some(key)
    }

    /// Chip selection follows the lock only; previews never select.
    pub fn is_selected(&self, key: &str) -> bool {
        self.locked.as_deref() == Some(key)
    }

    /// Shows `key` as a preview. Ignored while a tile is locked.
    pub fn preview(&mut self, key: &str) -> bool {
        if self.is_locked() {
            return false;
        }
        self.shown = Some(key.to_string());
        true
    }

    /// Hides an unlocked preview once the leave delay has elapsed.
    pub fn hide_preview(&mut self) {
        if !self.is_locked() {
            self.shown = None;
        }
    }

    /// Clicking the locked chip unlocks and hides it; any other chip takes the lock.
    pub fn toggle_lock(&mut self, key: &str) {
        if self.is_selected(key) {
            self.dismiss();
        } else {
            self.shown = Some(key.to_string());
            self.locked = Some(key.to_string());
        }
    }

    pub fn dismiss(&mut self) {
        self.shown = None;
        self.locked = None;
    }
}
