use std::sync::Arc;

use super::SessionService;

/// Client-side routes the guard can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Performs client-side navigation on behalf of the guard
pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unchecked,
    Authorized,
    Unauthorized,
}

/// Gate for a protected view subtree.
///
/// The first check inspects the session; its outcome is final for the
/// lifetime of this guard. A logout after authorization does not unmount
/// children that already rendered.
pub struct SessionGuard {
    session: Arc<SessionService>,
    state: GuardState,
}

impl SessionGuard {
    pub fn new(session: Arc<SessionService>) -> Self {
        Self {
            session,
            state: GuardState::Unchecked,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Resolve the guard state, redirecting to login when no token is stored
    pub fn check(&mut self, navigator: &dyn Navigator) -> GuardState {
        if self.state != GuardState::Unchecked {
            return self.state;
        }

        if self.session.is_authenticated() {
            self.state = GuardState::Authorized;
        } else {
            self.state = GuardState::Unauthorized;
            tracing::debug!("No session token, redirecting to {}", Route::Login.path());
            navigator.navigate(Route::Login);
        }

        self.state
    }

    /// Render `children` only when authorized
    pub fn render<T, F>(&mut self, navigator: &dyn Navigator, children: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        match self.check(navigator) {
            GuardState::Authorized => Some(children()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        routes: RefCell<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.routes.borrow_mut().push(route);
        }
    }

    #[test]
    fn no_token_renders_nothing_and_redirects_once() {
        let session = Arc::new(SessionService::in_memory());
        let navigator = RecordingNavigator::default();
        let mut guard = SessionGuard::new(session);
        let mut rendered = 0;

        assert_eq!(guard.state(), GuardState::Unchecked);
        assert!(guard.render(&navigator, || rendered += 1).is_none());
        assert!(guard.render(&navigator, || rendered += 1).is_none());

        assert_eq!(rendered, 0);
        assert_eq!(guard.state(), GuardState::Unauthorized);
        assert_eq!(*navigator.routes.borrow(), vec![Route::Login]);
    }

    #[test]
    fn token_renders_children_without_navigation() {
        let session = Arc::new(SessionService::in_memory());
        session.start("abc", false).unwrap();
        let navigator = RecordingNavigator::default();
        let mut guard = SessionGuard::new(session);

        assert_eq!(guard.render(&navigator, || "dashboard"), Some("dashboard"));
        assert_eq!(guard.state(), GuardState::Authorized);
        assert!(navigator.routes.borrow().is_empty());
    }

    #[test]
    fn authorization_is_not_rechecked_after_logout() {
        let session = Arc::new(SessionService::in_memory());
        session.start("abc", true).unwrap();
        let navigator = RecordingNavigator::default();
        let mut guard = SessionGuard::new(session.clone());
        assert_eq!(guard.check(&navigator), GuardState::Authorized);

        session.clear().unwrap();

        assert_eq!(guard.render(&navigator, || 1), Some(1));
        assert!(navigator.routes.borrow().is_empty());
    }

    #[test]
    fn fresh_guard_sees_logout() {
        let session = Arc::new(SessionService::in_memory());
        session.start("abc", true).unwrap();
        session.clear().unwrap();
        let navigator = RecordingNavigator::default();

        let mut guard = SessionGuard::new(session);
        assert_eq!(guard.check(&navigator), GuardState::Unauthorized);
        assert_eq!(navigator.routes.borrow().len(), 1);
    }
}
