//! # Auth guard for protected pages
//!
//! A page calls [`use_auth_guard`] on mount. The guard starts in
//! [`AuthStatus::Checking`], reads the session once, and moves to either
//! [`AuthStatus::Authenticated`] (exposing the cached user) or
//! [`AuthStatus::Unauthenticated`] (navigating to the configured route).
//!
//! The rule lives in [`evaluate`]:
//!
//! ```text
//! authorized = token present && (!require_admin || cached role == admin)
//! ```
//!
//! This only decides what to render. The cached role comes from unverified
//! local storage, so the backend re-checks every request and admin calls from
//! a tampered session still fail there.

use dioxus::prelude::*;
use store::{KeyValueStorage, Session, User};

use crate::auth::use_app;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Where to send the user, and whether the page is admin-only.
#[derive(Clone, Debug, PartialEq)]
pub struct GuardOptions<R> {
    /// Target when access is denied.
    pub redirect_to: R,
    /// Target after logout.
    pub login: R,
    pub require_admin: bool,
}

impl<R: Clone> GuardOptions<R> {
    /// Deny to `login`, which is also where logout lands.
    pub fn new(login: R) -> Self {
        Self {
            redirect_to: login.clone(),
            login,
            require_admin: false,
        }
    }

    pub fn redirect_to(mut self, route: R) -> Self {
        self.redirect_to = route;
        self
    }

    pub fn require_admin(mut self) -> Self {
        self.require_admin = true;
        self
    }
}

/// Result of checking the session against a page's requirements.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardOutcome<R> {
    /// Access granted. The user may be absent when only a token is stored.
    Allow(Option<User>),
    /// Access denied; navigate here.
    Redirect(R),
}

impl<R> GuardOutcome<R> {
    /// Status the guard settles in for this outcome.
    pub fn status(&self) -> AuthStatus {
        match self {
            GuardOutcome::Allow(_) => AuthStatus::Authenticated,
            GuardOutcome::Redirect(_) => AuthStatus::Unauthenticated,
        }
    }
}

/// Decide whether the stored session may view a page.
pub fn evaluate<S: KeyValueStorage, R: Clone>(
    session: &Session<S>,
    options: &GuardOptions<R>,
) -> GuardOutcome<R> {
    let user = session.user();
    let role_ok = !options.require_admin || user.as_ref().is_some_and(User::is_admin);
    if session.is_authenticated() && role_ok {
        GuardOutcome::Allow(user)
    } else {
        GuardOutcome::Redirect(options.redirect_to.clone())
    }
}

/// Clear the session and return the route logout lands on.
pub fn sign_out<S: KeyValueStorage, R: Clone>(
    session: &Session<S>,
    options: &GuardOptions<R>,
) -> R {
    session.clear();
    options.login.clone()
}

/// Handle returned by [`use_auth_guard`]. `Copy`, so it can move into any
/// number of event handlers.
#[derive(Clone, Copy)]
pub struct AuthGuard {
    pub status: Signal<AuthStatus>,
    pub user: Signal<Option<User>>,
    on_logout: Callback<()>,
}

impl AuthGuard {
    pub fn is_loading(&self) -> bool {
        *self.status.read() == AuthStatus::Checking
    }

    pub fn is_authenticated(&self) -> bool {
        *self.status.read() == AuthStatus::Authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.user.read().as_ref().is_some_and(User::is_admin)
    }

    /// Clear the session and go to the login route.
    pub fn logout(&self) {
        self.on_logout.call(());
    }
}

/// Guard the current page. Runs once on mount.
pub fn use_auth_guard<R: Routable>(options: GuardOptions<R>) -> AuthGuard {
    let app = use_app();
    let nav = use_navigator();
    let mut status = use_signal(|| AuthStatus::Checking);
    let mut user = use_signal(|| None::<User>);

    let session = app.session.clone();
    let check = options.clone();
    use_effect(move || match evaluate(&session, &check) {
        GuardOutcome::Allow(cached) => {
            user.set(cached);
            status.set(AuthStatus::Authenticated);
        }
        GuardOutcome::Redirect(route) => {
            tracing::debug!(require_admin = check.require_admin, "guard denied access");
            status.set(AuthStatus::Unauthenticated);
            nav.replace(route);
        }
    });

    let session = app.session;
    let on_logout = use_callback(move |()| {
        nav.push(sign_out(&session, &options));
    });

    AuthGuard {
        status,
        user,
        on_logout,
    }
}

/// Send signed-in visitors to `authenticated` and everybody else to
/// `unauthenticated`. Used by the landing route.
pub fn use_auth_redirect<R: Routable>(authenticated: R, unauthenticated: R) {
    let app = use_app();
    let nav = use_navigator();
    use_effect(move || {
        let target = if app.session.is_authenticated() {
            authenticated.clone()
        } else {
            unauthenticated.clone()
        };
        nav.replace(target);
    });
}

/// Leave a guest-only page (login, register) when a session already exists.
pub fn use_signed_in_redirect<R: Routable>(to: R) {
    let app = use_app();
    let nav = use_navigator();
    use_effect(move || {
        if app.session.is_authenticated() {
            nav.replace(to.clone());
        }
    });
}
