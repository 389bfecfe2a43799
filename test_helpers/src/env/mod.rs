//! Guards for mutating the process environment in tests.
//!
//! Document sources are named by environment variables, so resolver tests
//! bind those variables to fixture paths. Every mutation takes a global
//! re-entrant mutex and returns an RAII guard that restores the previous
//! value, or unsets the variable, when dropped.
//!
//! Guards for the same key stack and restore in LIFO order. Mutations of
//! different keys may interleave between guard creation and drop; hold a
//! [`lock`] or an [`EnvScope`] when a test needs the whole environment to
//! stay put across several operations.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _g = env::set_var("MAIN_CONFIG_FILE", "/etc/app/main.yaml");
//! // `MAIN_CONFIG_FILE` points at the document until `_g` is dropped.
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_set_var(key: &str, value: &OsStr) {
    unsafe { env::set_var(key, value) };
}

/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_remove_var(key: &str) {
    unsafe { env::remove_var(key) };
}

fn mutate_locked<F>(key: String, mutator: F, _guard: &ReentrantMutexGuard<'static, ()>) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard { key, original }
}

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        if let Some(val) = self.original.take() {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            unsafe { env_set_var(&self.key, &val) };
        } else {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            unsafe { env_remove_var(&self.key) };
        }
    }
}

/// Holds the global environment lock for its lifetime.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvVarLock {
    /// Sets `key` while the lock is held.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        // SAFETY: `self.guard` holds `ENV_MUTEX`.
        mutate_locked(key.into(), |k| unsafe { env_set_var(k, value.as_ref()) }, &self.guard)
    }

    /// Removes `key` while the lock is held.
    pub fn remove_var<K>(&self, key: K) -> EnvVarGuard
    where
        K: Into<String>,
    {
        // SAFETY: `self.guard` holds `ENV_MUTEX`.
        mutate_locked(key.into(), |k| unsafe { env_remove_var(k) }, &self.guard)
    }
}

/// Keeps the environment lock and a set of guards alive together.
///
/// # Examples
/// ```
/// use test_helpers::env;
///
/// let _scope = env::scope_with(|lock| {
///     vec![lock.remove_var("MAIN_CONFIG_FILE"), lock.remove_var("LOCAL_CONFIG_FILE")]
/// });
/// ```
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    _lock: EnvVarLock,
    guards: Vec<EnvVarGuard>,
}

impl fmt::Debug for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvScope")
            .field("guards", &self.guards)
            .finish_non_exhaustive()
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        // Restore while the lock is still held.
        drop(std::mem::take(&mut self.guards));
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// ```
/// use test_helpers::env;
///
/// let _g = env::set_var("LOCAL_CONFIG_FILE", "local.yaml");
/// assert!(matches!(std::env::var("LOCAL_CONFIG_FILE"), Ok(ref v) if v == "local.yaml"));
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    lock().set_var(key, value)
}

/// Removes an environment variable and returns a guard restoring its prior value.
///
/// ```
/// use test_helpers::env;
///
/// let _g = env::remove_var("LOCAL_CONFIG_FILE");
/// assert!(std::env::var("LOCAL_CONFIG_FILE").is_err());
/// ```
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    lock().remove_var(key)
}

/// Acquire the global environment lock for the lifetime of the guard.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        guard: ENV_MUTEX.lock(),
    }
}

/// Build guards with `builder` and keep them behind the lock.
pub fn scope_with<F>(builder: F) -> EnvScope
where
    F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
{
    let lock = lock();
    let guards = builder(&lock);
    EnvScope { _lock: lock, guards }
}

/// Point each variable in `bindings` at its document path.
///
/// Variables bound to `None` are removed for the scope's lifetime, which
/// lets a test model an unset source next to bound ones.
///
/// ```
/// use std::path::Path;
/// use test_helpers::env;
///
/// let _scope = env::bind_sources([
///     ("MAIN_CONFIG_FILE", Some(Path::new("main.yaml"))),
///     ("LOCAL_CONFIG_FILE", None),
/// ]);
/// assert!(std::env::var("LOCAL_CONFIG_FILE").is_err());
/// ```
pub fn bind_sources<'a, I>(bindings: I) -> EnvScope
where
    I: IntoIterator<Item = (&'a str, Option<&'a Path>)>,
{
    scope_with(|lock| {
        bindings
            .into_iter()
            .map(|(name, path)| match path {
                Some(path) => lock.set_var(name, path),
                None => lock.remove_var(name),
            })
            .collect()
    })
}

/// Run `f` while holding the global environment lock.
pub fn with_lock<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock();
    f()
}

#[cfg(test)]
mod tests;
