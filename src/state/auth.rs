//! Session provider: the single writer of authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the nav bar, and every page that needs identity read the
//! session through a read-only signal mirrored from this provider. Only the
//! provider touches the stored credential and only the provider changes the
//! session.
//!
//! ORDERING
//! ========
//! Transitions are queued and delivered in the order they happen, including
//! transitions triggered from inside a subscriber callback. Each operation
//! that awaits the network captures an epoch first; `logout`, `dispose`, and
//! any newer operation bump it, so late completions become no-ops.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use super::session::Session;
use crate::net::api::{AccountApi, ApiError};
use crate::net::types::{Credentials, LoginResponse, User};
use crate::util::credential::CredentialStore;

/// Failure surfaced by [`SessionProvider`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The API could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The login endpoint rejected the identifier/secret pair.
    #[error("invalid credentials")]
    InvalidCredential,

    /// The stored credential failed verification.
    #[error("session expired or invalid")]
    ExpiredOrInvalidSession,

    /// A logout, teardown, or newer login landed while this call was in flight.
    #[error("superseded by a newer session change")]
    Superseded,
}

impl AuthError {
    fn from_login(err: ApiError) -> Self {
        match err {
            ApiError::Network(detail) => Self::Network(detail),
            ApiError::Unauthorized | ApiError::Forbidden | ApiError::Status(_) | ApiError::Decode(_) => {
                Self::InvalidCredential
            },
        }
    }

    fn from_verification(err: ApiError) -> Self {
        match err {
            ApiError::Network(detail) => Self::Network(detail),
            ApiError::Unauthorized | ApiError::Forbidden | ApiError::Status(_) | ApiError::Decode(_) => {
                Self::ExpiredOrInvalidSession
            },
        }
    }

    /// Message suitable for a form error line.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Could not reach the server. Try again.",
            Self::InvalidCredential => "Invalid username or password.",
            Self::ExpiredOrInvalidSession => "Your session has expired. Please sign in again.",
            Self::Superseded => "Sign-in was interrupted. Try again.",
        }
    }
}

pub type SubscriptionId = u64;

type Listener = Rc<dyn Fn(&Session)>;

struct Inner {
    session: Session,
    epoch: u64,
    disposed: bool,
    next_subscription: SubscriptionId,
    listeners: Vec<(SubscriptionId, Listener)>,
    pending: VecDeque<Session>,
    delivering: bool,
}

/// Owns the session and the credential. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionProvider {
    inner: Rc<RefCell<Inner>>,
    storage: Rc<dyn CredentialStore>,
    api: Rc<dyn AccountApi>,
}

impl SessionProvider {
    pub fn new(storage: Rc<dyn CredentialStore>, api: Rc<dyn AccountApi>) -> Self {
        let inner = Inner {
            session: Session::Loading,
            epoch: 0,
            disposed: false,
            next_subscription: 0,
            listeners: Vec::new(),
            pending: VecDeque::new(),
            delivering: false,
        };
        Self { inner: Rc::new(RefCell::new(inner)), storage, api }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    /// Register a listener for every later transition.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscription;
        inner.next_subscription += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().listeners.retain(|(existing, _)| *existing != id);
    }

    /// Resolve the startup session from the stored credential.
    ///
    /// Without a credential this settles synchronously with no network call.
    /// A failed verification clears the credential silently; that is the
    /// ordinary "not signed in" path.
    pub async fn initialize(&self) {
        let Some(credential) = self.storage.load() else {
            log::debug!("no stored credential");
            self.transition(Session::Unauthenticated);
            return;
        };
        let Some(epoch) = self.begin() else {
            return;
        };
        self.transition(Session::Loading);

        let result = self.api.account_info(&credential).await;
        if !self.is_current(epoch) {
            log::debug!("discarding stale verification result");
            return;
        }
        match result {
            Ok(user) => {
                log::info!("session restored for user {}", user.id);
                self.transition(Session::Authenticated(user));
            }
            Err(err) => {
                let err = AuthError::from_verification(err);
                log::info!("stored credential dropped: {err}");
                self.storage.clear();
                self.transition(Session::Unauthenticated);
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredential` or `Network` when the login call fails, and
    /// `Superseded` when a logout or teardown lands before it completes. None
    /// of these persist a credential.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let Some(epoch) = self.begin() else {
            return Err(AuthError::Superseded);
        };
        let result = self.api.login(credentials).await;
        if !self.is_current(epoch) {
            log::debug!("discarding stale login result");
            return Err(AuthError::Superseded);
        }
        match result {
            Ok(LoginResponse { credential, user }) => {
                log::info!("signed in as user {}", user.id);
                self.storage.save(&credential);
                self.transition(Session::Authenticated(user.clone()));
                Ok(user)
            }
            Err(err) => {
                let err = AuthError::from_login(err);
                log::warn!("login failed: {err}");
                // A login started during startup verification cancelled it;
                // the unverified credential goes with it.
                if !self.session().is_authenticated() {
                    self.storage.clear();
                    self.transition(Session::Unauthenticated);
                }
                Err(err)
            }
        }
    }

    /// Forget the credential and sign out. Synchronous, no network call.
    pub fn logout(&self) {
        self.invalidate();
        self.storage.clear();
        self.transition(Session::Unauthenticated);
    }

    /// Sink for an authorization failure from any API call.
    pub fn handle_unauthorized(&self) {
        log::info!("API rejected the session credential; signing out");
        self.logout();
    }

    /// Run an API call with the stored credential attached.
    ///
    /// A `401` answer signs the user out, unless the session already changed
    /// while the call was in flight. A `403` leaves the session alone.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` without calling `call` when no credential is
    /// stored, and otherwise whatever `call` returns.
    pub async fn authorized<T, F, Fut>(&self, call: F) -> Result<T, ApiError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let Some(credential) = self.storage.load() else {
            return Err(ApiError::Unauthorized);
        };
        let epoch = self.inner.borrow().epoch;
        let result = call(credential).await;
        if matches!(result, Err(ApiError::Unauthorized)) && self.is_current(epoch) {
            self.handle_unauthorized();
        }
        result
    }

    /// Tear down: drop listeners and turn in-flight completions into no-ops.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.disposed = true;
        inner.epoch += 1;
        inner.listeners.clear();
        inner.pending.clear();
    }

    /// Start a superseding operation. `None` once disposed.
    fn begin(&self) -> Option<u64> {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return None;
        }
        inner.epoch += 1;
        Some(inner.epoch)
    }

    fn invalidate(&self) {
        self.inner.borrow_mut().epoch += 1;
    }

    fn is_current(&self, epoch: u64) -> bool {
        let inner = self.inner.borrow();
        !inner.disposed && inner.epoch == epoch
    }

    fn transition(&self, next: Session) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.session == next {
                return;
            }
            log::debug!("session {} -> {}", inner.session.label(), next.label());
            inner.session = next.clone();
            inner.pending.push_back(next);
            if inner.delivering {
                return;
            }
            inner.delivering = true;
        }

        loop {
            let (state, listeners) = {
                let mut inner = self.inner.borrow_mut();
                let Some(state) = inner.pending.pop_front() else {
                    inner.delivering = false;
                    return;
                };
                let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
                (state, listeners)
            };
            for listener in &listeners {
                listener(&state);
            }
        }
    }
}

// =============================================================================
// LEPTOS CONTEXT
// =============================================================================

/// Copyable context handle to the provider for event handlers and tasks.
#[derive(Clone, Copy)]
pub struct SessionHandle(StoredValue<SessionProvider, LocalStorage>);

impl SessionHandle {
    /// The provider, or `None` once its owner has been cleaned up.
    pub fn provider(&self) -> Option<SessionProvider> {
        self.0.try_with_value(Clone::clone)
    }

    pub fn logout(&self) {
        if let Some(provider) = self.provider() {
            provider.logout();
        }
    }
}

/// Install the provider and a read-only session signal into context.
///
/// The returned handle is the same one `use_session_handle` yields below.
pub fn provide_session(provider: SessionProvider) -> SessionHandle {
    let (session, set_session) = signal(provider.session());
    provider.subscribe(move |next| {
        let _ = set_session.try_set(next.clone());
    });
    let handle = SessionHandle(StoredValue::new_local(provider));
    provide_context(session);
    provide_context(handle);
    handle
}

/// Read-only session signal from context.
pub fn use_session() -> ReadSignal<Session> {
    expect_context::<ReadSignal<Session>>()
}

pub fn use_session_handle() -> SessionHandle {
    expect_context::<SessionHandle>()
}
