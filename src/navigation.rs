use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";

/// Pages behind the login, in sidebar order.
pub const PROTECTED_ROUTES: &[&str] = &[
    DASHBOARD,
    "/users",
    "/workout-plans",
    "/diet-plans",
    "/memberships",
    "/attendance",
    "/payments",
    "/profile",
];

/// Receives forced navigations (session expiry, login, logout).
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Logs navigations; a CLI has no pages to switch between.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!("Redirect to {}", path);
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.visited
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn all(&self) -> Vec<String> {
        self.visited.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(path.to_string());
    }
}

/// Where a request for `path` actually lands given the current session.
pub fn resolve_route(path: &str, session: &SessionStore) -> &'static str {
    if path == LOGIN {
        return LOGIN;
    }
    let target = PROTECTED_ROUTES
        .iter()
        .copied()
        .find(|route| *route == path)
        .unwrap_or(DASHBOARD);

    if session.is_authenticated() {
        target
    } else {
        LOGIN
    }
}
