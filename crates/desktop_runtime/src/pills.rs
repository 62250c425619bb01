//! Taskbar pill strip and the window-id registry layered over it.
//!
//! The strip holds every pill rendered on the taskbar, in display order. The registry is the set
//! of window ids whose pills took part in canonical registration; only those pills are covered by
//! the global active/minimized projection. Pills that a collaborator appended to the strip without
//! registering are still reachable through the structural fallback of [`PillRegistry::resolve`].

use std::collections::BTreeSet;

use crate::model::{Pill, WindowId};

/// Which resolution tier answered a pill lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillSource {
    /// The window id is registered.
    Registry,
    /// The pill was found by scanning the strip for its window tag.
    Structural,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PillRegistry {
    strip: Vec<Pill>,
    registered: BTreeSet<WindowId>,
}

impl PillRegistry {
    /// Registers `pill` under `window_id`.
    ///
    /// Idempotent: when the strip already holds a pill tagged `window_id` that pill is adopted
    /// and `pill` is dropped, so a window never ends up with two pills.
    pub fn register(&mut self, window_id: WindowId, pill: Pill) {
        if self.position(window_id).is_none() {
            self.strip.push(Pill { window_id, ..pill });
        }
        self.registered.insert(window_id);
    }

    /// Appends a pill to the strip without registering it.
    ///
    /// Returns `false` when the window already has a pill.
    pub fn attach_unregistered(&mut self, pill: Pill) -> bool {
        if self.position(pill.window_id).is_some() {
            return false;
        }
        self.strip.push(pill);
        true
    }

    pub fn is_registered(&self, window_id: WindowId) -> bool {
        self.registered.contains(&window_id)
    }

    /// Resolves the pill for `window_id`: registry first, then the structural strip scan.
    pub fn resolve(&self, window_id: WindowId) -> Option<(&Pill, PillSource)> {
        let pill = self.strip.iter().find(|pill| pill.window_id == window_id)?;
        let source = if self.is_registered(window_id) {
            PillSource::Registry
        } else {
            PillSource::Structural
        };
        Some((pill, source))
    }

    pub fn resolve_mut(&mut self, window_id: WindowId) -> Option<&mut Pill> {
        self.strip.iter_mut().find(|pill| pill.window_id == window_id)
    }

    /// Whether the strip carries a pill tagged `window_id`, registered or not.
    pub fn has_tagged(&self, window_id: WindowId) -> bool {
        self.position(window_id).is_some()
    }

    pub fn registered_mut(&mut self) -> impl Iterator<Item = &mut Pill> {
        let registered = &self.registered;
        self.strip
            .iter_mut()
            .filter(move |pill| registered.contains(&pill.window_id))
    }

    /// Removes the window's pill from the strip and the registry.
    pub fn remove(&mut self, window_id: WindowId) -> Option<Pill> {
        self.registered.remove(&window_id);
        let index = self.position(window_id)?;
        Some(self.strip.remove(index))
    }

    /// Pills in taskbar display order.
    pub fn strip(&self) -> &[Pill] {
        &self.strip
    }

    fn position(&self, window_id: WindowId) -> Option<usize> {
        self.strip.iter().position(|pill| pill.window_id == window_id)
    }
}
