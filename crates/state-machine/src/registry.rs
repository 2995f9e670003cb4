//! Factory registry and instance cache.
//!
//! [`StateRegistry`] maps each key to a no-argument construction closure and
//! lazily turns it into the single instance the machine will ever hold for
//! that key.

use std::collections::HashMap;

use crate::{MachineError, State, StateKey};

/// Boxed construction closure for one state key.
pub type StateFactory<K, H> = Box<dyn Fn() -> Box<dyn State<K, H>>>;

/// Owns the factories and the created state instances, at most one per key.
pub struct StateRegistry<K, H> {
    factories: HashMap<K, StateFactory<K, H>>,
    states: HashMap<K, Box<dyn State<K, H>>>,
}

impl<K: StateKey, H> StateRegistry<K, H> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            states: HashMap::new(),
        }
    }

    /// Records how to construct the state for `key`.
    ///
    /// Replacing a factory never touches an instance that already exists.
    pub fn register<S, F>(&mut self, key: K, factory: F)
    where
        S: State<K, H> + 'static,
        F: Fn() -> S + 'static,
        H: 'static,
    {
        let boxed: StateFactory<K, H> =
            Box::new(move || Box::new(factory()) as Box<dyn State<K, H>>);
        if self.factories.insert(key, boxed).is_some() {
            tracing::debug!(state = ?key, "state factory replaced");
        }
    }

    /// Constructs and initializes the state for `key`.
    ///
    /// Initialization runs exactly once per key: if an instance already
    /// exists it is kept and `DuplicateRegistration` is returned.
    pub fn add_state(&mut self, key: K, host: &mut H) -> Result<(), MachineError> {
        if self.states.contains_key(&key) {
            tracing::warn!(state = ?key, "state already registered, keeping existing instance");
            return Err(MachineError::duplicate(key));
        }

        let factory = self.factories.get(&key).ok_or_else(|| {
            let err = MachineError::unknown(key);
            tracing::error!(
                state = ?key,
                severity = err.severity().as_str(),
                "no factory registered for state"
            );
            err
        })?;

        let mut state = factory();
        state.init(host);
        self.states.insert(key, state);

        tracing::debug!(state = ?key, "state created");
        Ok(())
    }

    /// Returns the instance for `key`, creating it first if needed.
    pub fn get_or_create(
        &mut self,
        key: K,
        host: &mut H,
    ) -> Result<&mut (dyn State<K, H> + 'static), MachineError> {
        if !self.states.contains_key(&key) {
            self.add_state(key, host)?;
        }
        self.get_mut(key).ok_or_else(|| MachineError::unknown(key))
    }

    pub fn get(&self, key: K) -> Option<&(dyn State<K, H> + 'static)> {
        self.states.get(&key).map(|state| &**state)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut (dyn State<K, H> + 'static)> {
        self.states.get_mut(&key).map(|state| &mut **state)
    }

    /// Whether an instance exists for `key`.
    pub fn contains(&self, key: K) -> bool {
        self.states.contains_key(&key)
    }

    /// Whether a factory is registered for `key`.
    pub fn is_registered(&self, key: K) -> bool {
        self.factories.contains_key(&key)
    }

    /// Number of created instances.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<K: StateKey, H> Default for StateRegistry<K, H> {
    fn default() -> Self {
        Self::new()
    }
}
