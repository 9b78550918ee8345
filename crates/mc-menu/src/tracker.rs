//! Which menu each session last had shown.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::trace;

use crate::menu::Menu;
use crate::session::SessionId;

/// The last menu sent to a session.
#[derive(Debug, Clone)]
pub struct TrackedMenu {
    pub menu: Menu,
    /// Cleared when the player closes the window.
    pub open: bool,
}

/// Per-session menu table, safe to share between connection tasks.
#[derive(Debug, Default)]
pub struct MenuTracker {
    menus: Mutex<HashMap<SessionId, TrackedMenu>>,
}

impl MenuTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide tracker used by the free functions.
    pub fn global() -> Arc<MenuTracker> {
        static GLOBAL: OnceLock<Arc<MenuTracker>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(MenuTracker::new())).clone()
    }

    pub fn get(&self, session: SessionId) -> Option<TrackedMenu> {
        self.lock().get(&session).cloned()
    }

    /// Record `menu` as shown and open for `session`.
    pub fn set(&self, session: SessionId, menu: Menu) {
        trace!("Tracking {:?} for {session}", menu.name());
        self.lock().insert(session, TrackedMenu { menu, open: true });
    }

    /// Flag the session's menu as closed, returning it if it was open.
    pub fn mark_closed(&self, session: SessionId) -> Option<Menu> {
        let mut menus = self.lock();
        let tracked = menus.get_mut(&session).filter(|t| t.open)?;
        tracked.open = false;
        Some(tracked.menu.clone())
    }

    pub fn remove(&self, session: SessionId) -> Option<TrackedMenu> {
        self.lock().remove(&session)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, TrackedMenu>> {
        self.menus.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
