//! Client mirror of the server-held login session.
//!
//! Hydration is a visible two-phase transition rather than implicit
//! sequential awaits:
//!
//! ```text
//! Hydrating ──cache read──► Reconciling ──server verdict──► Settled
//! ```
//!
//! While `Reconciling`, the UI may show the cached (possibly stale) profile;
//! the server's answer always wins. The cached copy lives in the local
//! storage scope and is cleared on logout or when the server says we are
//! signed out — logout clears it even when the server call fails, so the
//! client can never strand itself in a false-authenticated state.
//!
//! The drivers below mutate a plain `AuthSession`; the platform crate copies
//! the session out of its signal, runs a driver, and writes it back. Tests
//! run the same drivers against an in-memory `AuthApi`.

use super::api::{ApiError, AuthApi, ProfileUpdate, RegisterRequest, UserProfile, UserRole};
use super::storage;

/// Local-scope storage key for the cached profile.
pub const CACHED_PROFILE_KEY: &str = "verki.auth.profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// Nothing known yet; cache not read.
    Hydrating,
    /// Cached profile (if any) is showing; server verdict pending.
    Reconciling,
    /// Server has answered (or a request finished); state is authoritative.
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub phase: AuthPhase,
    pub user: Option<UserProfile>,
    /// A request is in flight; forms disable their submit affordance.
    pub busy: bool,
    /// Server-provided message from the last failed operation, verbatim.
    pub error: Option<String>,
}

impl AuthSession {
    pub fn boot() -> Self {
        Self {
            phase: AuthPhase::Hydrating,
            user: None,
            busy: false,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn hydrated(&mut self, cached: Option<UserProfile>) {
        self.user = cached;
        self.phase = AuthPhase::Reconciling;
    }

    fn settled(&mut self, user: Option<UserProfile>) {
        self.user = user;
        self.phase = AuthPhase::Settled;
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::boot()
    }
}

/// App-load reconciliation: hydrate optimistically from the cache, then ask
/// the server who we are.
pub async fn run_check_auth(api: &dyn AuthApi, session: &mut AuthSession) {
    let cached = storage::local_read::<UserProfile>(CACHED_PROFILE_KEY)
        .ok()
        .flatten();
    session.hydrated(cached);

    match api.current_user().await {
        Ok(server_user) => {
            remember_profile(server_user.as_ref());
            session.settled(server_user);
        }
        Err(err) => {
            // Server unreachable. The hydrated cache stays visible; only a
            // server verdict replaces it.
            debug_log(&format!("reconcile failed: {err}"));
            session.phase = AuthPhase::Settled;
        }
    }
}

pub async fn run_login(
    api: &dyn AuthApi,
    session: &mut AuthSession,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    session.busy = true;
    session.error = None;

    let result = async {
        api.login(email, password).await?;
        api.current_user().await
    }
    .await;

    session.busy = false;
    match result {
        Ok(Some(user)) => {
            remember_profile(Some(&user));
            session.settled(Some(user));
            Ok(())
        }
        Ok(None) => {
            let err = ApiError::Api {
                status: 401,
                message: "Login did not establish a session".to_string(),
            };
            session.error = Some(err.to_string());
            Err(err)
        }
        Err(err) => {
            session.error = Some(err.to_string());
            Err(err)
        }
    }
}

/// Request server-side invalidation, then clear the local mirror no matter
/// what the server said.
pub async fn run_logout(api: &dyn AuthApi, session: &mut AuthSession) {
    session.busy = true;
    let result = api.logout().await;
    if let Err(err) = &result {
        debug_log(&format!("logout request failed: {err}"));
    }

    remember_profile(None);
    session.busy = false;
    session.error = None;
    session.settled(None);
}

pub async fn run_register(
    api: &dyn AuthApi,
    session: &mut AuthSession,
    request: &RegisterRequest,
) -> Result<(), ApiError> {
    session.busy = true;
    session.error = None;
    let result = api.register(request).await;
    session.busy = false;
    if let Err(err) = &result {
        session.error = Some(err.to_string());
    }
    result
}

pub async fn run_update_profile(
    api: &dyn AuthApi,
    session: &mut AuthSession,
    update: &ProfileUpdate,
) -> Result<(), ApiError> {
    session.busy = true;
    session.error = None;
    let result = api.update_profile(update).await;
    session.busy = false;
    match result {
        Ok(user) => {
            remember_profile(Some(&user));
            session.settled(Some(user));
            Ok(())
        }
        Err(err) => {
            session.error = Some(err.to_string());
            Err(err)
        }
    }
}

pub async fn run_switch_role(
    api: &dyn AuthApi,
    session: &mut AuthSession,
    role: UserRole,
) -> Result<(), ApiError> {
    session.busy = true;
    session.error = None;
    let result = api.switch_role(role).await;
    session.busy = false;
    match result {
        Ok(user) => {
            remember_profile(Some(&user));
            session.settled(Some(user));
            Ok(())
        }
        Err(err) => {
            session.error = Some(err.to_string());
            Err(err)
        }
    }
}

/// Keep the cached copy in step with what we believe. Cache trouble is
/// logged, never surfaced: the session state is already correct in memory.
fn remember_profile(user: Option<&UserProfile>) {
    let result = match user {
        Some(user) => storage::local_write(CACHED_PROFILE_KEY, user),
        None => storage::local_remove(CACHED_PROFILE_KEY),
    };
    if let Err(err) = result {
        debug_log(&format!("profile cache update failed: {err}"));
    }
}

#[allow(unused_variables)]
fn debug_log(message: &str) {
    #[cfg(debug_assertions)]
    eprintln!("[auth] {message}");
}
