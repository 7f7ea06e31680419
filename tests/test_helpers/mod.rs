//! Process environment helpers for configuration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Applies variable changes for its lifetime and restores them on drop.
///
/// Guards hold a process-wide lock, so tests that touch the environment run
/// one at a time.
pub struct EnvVarGuard {
    restore: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets each variable mapped to `Some` and removes each mapped to `None`.
    pub fn set_vars(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let restore = changes
            .iter()
            .map(|&(name, value)| {
                let previous = env::var(name).ok();
                apply(name, value);
                (name.to_owned(), previous)
            })
            .collect();
        Self {
            restore,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (name, previous) in self.restore.drain(..).rev() {
            apply(&name, previous.as_deref());
        }
    }
}

fn apply(name: &str, value: Option<&str>) {
    // SAFETY: ENV_LOCK is held by every caller, serializing mutation.
    unsafe {
        match value {
            Some(new_value) => env::set_var(name, new_value),
            None => env::remove_var(name),
        }
    }
}
