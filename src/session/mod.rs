//! Language session and change notification
//!
//! A [`Session`] tracks the currently active language against a
//! [`Registry`] of translation resources and notifies subscribers when
//! the language changes. It is the single value a host application
//! constructs at its composition root and hands to consumers; there is
//! no process-wide singleton, so tests and multi-tenant hosts can run
//! independent sessions side by side.
//!
//! All operations are synchronous and non-blocking. Internal state is
//! guarded with locks and atomics so a `Session` can be shared across
//! threads, but delivery stays synchronous and ordered: every subscriber
//! registered at the time of a successful `set_language` call has been
//! invoked, in subscription order, before that call returns.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, error};

use crate::registry::{Registry, ResourceSet};
use crate::resolver::{self, TranslationParams};
use crate::utils::errors::{LangswitchError, Result};
use crate::utils::logging::log_language_switch;

type ChangeCallback = Arc<dyn Fn(&str) + Send + Sync>;

struct Subscriber {
    id: u64,
    callback: ChangeCallback,
}

/// Capability to deregister a change listener.
///
/// Obtained from [`Session::subscribe`]; passing it to
/// [`Session::unsubscribe`] removes the listener. Handles are never
/// reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

/// Runtime localization state: active language, fallback language and
/// the subscriber list, bound to a [`Registry`] of resources.
pub struct Session {
    registry: Registry,
    current: RwLock<String>,
    fallback: String,
    subscribers: Mutex<Vec<Subscriber>>,
    next_handle: AtomicU64,
    notifying: AtomicBool,
}

impl Session {
    /// Create a session over a populated registry.
    ///
    /// Fails with a configuration error if the registry is empty or if
    /// either language has no registered ResourceSet; nothing is
    /// constructed on failure. The fallback language is fixed for the
    /// lifetime of the session.
    pub fn new(
        registry: Registry,
        initial_language: impl Into<String>,
        fallback_language: impl Into<String>,
    ) -> Result<Self> {
        let initial_language = initial_language.into();
        let fallback_language = fallback_language.into();

        if registry.is_empty() {
            return Err(LangswitchError::Config(
                "registry has no registered languages".to_string(),
            ));
        }
        if !registry.contains(&initial_language) {
            return Err(LangswitchError::UnknownLanguage {
                language: initial_language,
            });
        }
        if !registry.contains(&fallback_language) {
            return Err(LangswitchError::UnknownLanguage {
                language: fallback_language,
            });
        }

        debug!(
            initial = %initial_language,
            fallback = %fallback_language,
            languages = registry.len(),
            "Session created"
        );

        Ok(Self {
            registry,
            current: RwLock::new(initial_language),
            fallback: fallback_language,
            subscribers: Mutex::new(Vec::new()),
            next_handle: AtomicU64::new(1),
            notifying: AtomicBool::new(false),
        })
    }

    /// Translate a key under the current language.
    ///
    /// Never fails: a key absent from both the current and the fallback
    /// language resolves to the key itself.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, None)
    }

    /// Translate a key with interpolation parameters
    pub fn translate_with(&self, key: &str, params: Option<&TranslationParams>) -> String {
        let current = self.current.read().unwrap_or_else(|e| e.into_inner());
        resolver::resolve(&self.registry, key, &current, &self.fallback, params)
    }

    /// The currently active language code
    pub fn current_language(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The fallback language code
    pub fn fallback_language(&self) -> &str {
        &self.fallback
    }

    /// The registry backing this session
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register resources for an additional language after construction
    pub fn register(&self, language: impl Into<String>, resources: ResourceSet) {
        self.registry.register(language, resources);
    }

    /// Switch the active language and notify subscribers.
    ///
    /// Rejected, with state unchanged, when `language` has no registered
    /// ResourceSet or when called from within a subscriber callback of a
    /// switch already in progress. On success every subscriber is
    /// invoked synchronously, in subscription order, with the new
    /// language before this method returns. A panicking subscriber is
    /// reported and skipped; the remaining subscribers still run.
    pub fn set_language(&self, language: &str) -> Result<()> {
        if self.notifying.load(Ordering::Acquire) {
            return Err(LangswitchError::ReentrantSwitch);
        }
        if !self.registry.contains(language) {
            return Err(LangswitchError::UnknownLanguage {
                language: language.to_string(),
            });
        }

        let previous = {
            let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
            std::mem::replace(&mut *current, language.to_string())
        };

        // Snapshot under the lock, deliver outside it. Callbacks may
        // subscribe or unsubscribe; that takes effect from the next
        // notification, never the one in flight.
        let snapshot: Vec<(u64, ChangeCallback)> = {
            let subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
            subscribers
                .iter()
                .map(|s| (s.id, Arc::clone(&s.callback)))
                .collect()
        };

        self.notifying.store(true, Ordering::Release);
        for (id, callback) in &snapshot {
            let callback = callback.as_ref();
            if catch_unwind(AssertUnwindSafe(|| callback(language))).is_err() {
                error!(
                    subscriber = id,
                    language = language,
                    "Change subscriber panicked during notification"
                );
            }
        }
        self.notifying.store(false, Ordering::Release);

        log_language_switch(&previous, language, snapshot.len());
        Ok(())
    }

    /// Register a change listener, invoked with the new language code on
    /// every successful [`set_language`](Session::set_language) call.
    /// Listeners are notified in subscription order.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.next_handle.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Subscriber {
                id,
                callback: Arc::new(callback),
            });
        SubscriptionHandle(id)
    }

    /// Remove a change listener. Idempotent: unsubscribing an
    /// already-removed handle is a no-op.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|s| s.id != handle.0);
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("current", &self.current_language())
            .field("fallback", &self.fallback)
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
