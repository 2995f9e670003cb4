//! Transition engine.
//!
//! [`StateMachine`] tracks the single current state, polls it once per tick
//! and applies the transition it requests: exit the old state, create or
//! reuse the new one, enter it.

use crate::{MachineError, State, StateKey, StateRegistry};

/// A finite state machine holding at most one instance per state key.
pub struct StateMachine<K, H> {
    registry: StateRegistry<K, H>,
    current: Option<K>,
    previous: Option<K>,
    transitions: u64,
    time_in_state: f32,
    ticks_in_state: u64,
}

impl<K: StateKey, H> StateMachine<K, H> {
    pub fn new() -> Self {
        Self::from_registry(StateRegistry::new())
    }

    pub fn from_registry(registry: StateRegistry<K, H>) -> Self {
        Self {
            registry,
            current: None,
            previous: None,
            transitions: 0,
            time_in_state: 0.0,
            ticks_in_state: 0,
        }
    }

    pub fn builder() -> StateMachineBuilder<K, H> {
        StateMachineBuilder::new()
    }

    /// Records how to construct the state for `key`. See [`StateRegistry::register`].
    pub fn register<S, F>(&mut self, key: K, factory: F)
    where
        S: State<K, H> + 'static,
        F: Fn() -> S + 'static,
        H: 'static,
    {
        self.registry.register(key, factory);
    }

    /// Creates the state for `key` ahead of time. See [`StateRegistry::add_state`].
    pub fn add_state(&mut self, key: K, host: &mut H) -> Result<(), MachineError> {
        self.registry.add_state(key, host)
    }

    /// Sets the initial state, creating it if needed.
    ///
    /// Exits the current state if there is one, then enters `key`. Calling it
    /// again acts as a forced transition, even when `key` is already current.
    pub fn set_starting_state(&mut self, key: K, host: &mut H) -> Result<(), MachineError> {
        self.registry.get_or_create(key, host)?;

        if let Some(current) = self.current {
            self.state_mut(current)?.on_exit(host);
        }
        self.enter(key, host)?;

        tracing::debug!(state = ?key, "starting state set");
        Ok(())
    }

    /// Polls the current state for one tick and applies the transition it
    /// requests. Returns the key that is current afterwards.
    ///
    /// A request is a self-transition, and therefore ignored, iff the
    /// requested key equals the current key. Otherwise exactly one `on_exit`
    /// on the old state is followed by exactly one `on_enter` on the new one.
    pub fn advance(&mut self, host: &mut H, dt: f32) -> Result<K, MachineError> {
        let Some(current) = self.current else {
            let err = MachineError::UninitializedMachine;
            tracing::error!(
                severity = err.severity().as_str(),
                "advance called before a starting state was set"
            );
            return Err(err);
        };
        if !dt.is_finite() || dt < 0.0 {
            return Err(MachineError::InvalidDeltaTime(dt));
        }

        let requested = self.state_mut(current)?.on_update(host, dt);

        if let Some(next) = requested.filter(|next| *next != current) {
            // Entering resets the per-state counters.
            self.transition(current, next, host)?;
        } else {
            if requested.is_some() {
                tracing::trace!(state = ?current, "self-transition ignored");
            }
            self.time_in_state += dt;
            self.ticks_in_state += 1;
        }

        Ok(self.current.unwrap_or(current))
    }

    fn transition(&mut self, from: K, to: K, host: &mut H) -> Result<(), MachineError> {
        // A target that can never be built fails before `from` is exited.
        if !self.registry.contains(to) && !self.registry.is_registered(to) {
            let err = MachineError::unknown(to);
            tracing::error!(
                from = ?from,
                to = ?to,
                severity = err.severity().as_str(),
                "transition to unregistered state"
            );
            return Err(err);
        }

        self.state_mut(from)?.on_exit(host);
        self.registry.get_or_create(to, host)?;
        self.enter(to, host)?;

        tracing::debug!(from = ?from, to = ?to, "state transition");
        Ok(())
    }

    fn enter(&mut self, key: K, host: &mut H) -> Result<(), MachineError> {
        self.previous = self.current.replace(key);
        self.transitions += 1;
        self.time_in_state = 0.0;
        self.ticks_in_state = 0;
        self.state_mut(key)?.on_enter(host);
        Ok(())
    }

    fn state_mut(&mut self, key: K) -> Result<&mut (dyn State<K, H> + 'static), MachineError> {
        self.registry
            .get_mut(key)
            .ok_or_else(|| MachineError::unknown(key))
    }

    /// Key of the current state, `None` before `set_starting_state`.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Key of the state that was current before the last transition.
    pub fn previous(&self) -> Option<K> {
        self.previous
    }

    pub fn current_state(&self) -> Option<&(dyn State<K, H> + 'static)> {
        self.current.and_then(|key| self.registry.get(key))
    }

    pub fn current_debug_string(&self) -> Option<String> {
        self.current_state().map(|state| state.debug_string())
    }

    pub fn state(&self, key: K) -> Option<&(dyn State<K, H> + 'static)> {
        self.registry.get(key)
    }

    pub fn contains(&self, key: K) -> bool {
        self.registry.contains(key)
    }

    /// Number of state instances created so far.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Number of times a state was entered, the starting state included.
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    /// Seconds accumulated by `advance` since the current state was entered.
    pub fn time_in_state(&self) -> f32 {
        self.time_in_state
    }

    pub fn ticks_in_state(&self) -> u64 {
        self.ticks_in_state
    }

    pub fn registry(&self) -> &StateRegistry<K, H> {
        &self.registry
    }
}

impl<K: StateKey, H> Default for StateMachine<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`StateMachine`].
///
/// # Example
///
/// ```rust,ignore
/// let machine = StateMachine::builder()
///     .state(Mode::Idle, Idle::default)
///     .state(Mode::Chase, Chase::default)
///     .starting_state(Mode::Idle)
///     .build(&mut host)?;
/// ```
pub struct StateMachineBuilder<K, H> {
    registry: StateRegistry<K, H>,
    starting: Option<K>,
}

impl<K: StateKey, H> StateMachineBuilder<K, H> {
    pub fn new() -> Self {
        Self {
            registry: StateRegistry::new(),
            starting: None,
        }
    }

    pub fn state<S, F>(mut self, key: K, factory: F) -> Self
    where
        S: State<K, H> + 'static,
        F: Fn() -> S + 'static,
        H: 'static,
    {
        self.registry.register(key, factory);
        self
    }

    pub fn starting_state(mut self, key: K) -> Self {
        self.starting = Some(key);
        self
    }

    /// Builds the machine, entering the starting state if one was given.
    pub fn build(self, host: &mut H) -> Result<StateMachine<K, H>, MachineError> {
        let mut machine = StateMachine::from_registry(self.registry);
        if let Some(key) = self.starting {
            machine.set_starting_state(key, host)?;
        }
        Ok(machine)
    }
}

impl<K: StateKey, H> Default for StateMachineBuilder<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Light {
        Red,
        Green,
    }

    #[derive(Default)]
    struct Crossing {
        events: Vec<String>,
        go: bool,
    }

    /// Switches to `next` while `go` is set, otherwise stays put.
    struct Lamp {
        me: Light,
        next: Light,
        updates: u32,
    }

    impl State<Light, Crossing> for Lamp {
        fn init(&mut self, host: &mut Crossing) {
            host.events.push(format!("init {:?}", self.me));
        }

        fn on_enter(&mut self, host: &mut Crossing) {
            host.events.push(format!("enter {:?}", self.me));
        }

        fn on_update(&mut self, host: &mut Crossing, _dt: f32) -> Option<Light> {
            self.updates += 1;
            Some(if host.go { self.next } else { self.me })
        }

        fn on_exit(&mut self, host: &mut Crossing) {
            host.events.push(format!("exit {:?}", self.me));
        }

        fn debug_string(&self) -> String {
            format!("{:?} ({} updates)", self.me, self.updates)
        }
    }

    fn machine() -> StateMachine<Light, Crossing> {
        let mut machine = StateMachine::new();
        machine.register(Light::Red, || Lamp {
            me: Light::Red,
            next: Light::Green,
            updates: 0,
        });
        machine.register(Light::Green, || Lamp {
            me: Light::Green,
            next: Light::Red,
            updates: 0,
        });
        machine
    }

    #[test]
    fn advance_before_start_is_uninitialized() {
        let mut machine = machine();
        let mut host = Crossing::default();
        machine.add_state(Light::Red, &mut host).unwrap();

        for _ in 0..2 {
            let err = machine.advance(&mut host, 0.1).unwrap_err();
            assert_eq!(err, MachineError::UninitializedMachine);
            assert!(err.severity().is_fatal());
        }
    }

    #[test]
    fn self_transition_keeps_state_data() {
        let mut machine = machine();
        let mut host = Crossing::default();
        machine.set_starting_state(Light::Red, &mut host).unwrap();

        for _ in 0..3 {
            assert_eq!(machine.advance(&mut host, 0.5), Ok(Light::Red));
        }

        assert_eq!(host.events, ["init Red", "enter Red"]);
        assert_eq!(machine.current_debug_string().as_deref(), Some("Red (3 updates)"));
        assert_eq!(machine.ticks_in_state(), 3);
        assert!((machine.time_in_state() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn transition_exits_before_entering() {
        let mut machine = machine();
        let mut host = Crossing::default();
        machine.set_starting_state(Light::Red, &mut host).unwrap();
        host.events.clear();
        host.go = true;

        assert_eq!(machine.advance(&mut host, 0.1), Ok(Light::Green));
        assert_eq!(host.events, ["exit Red", "init Green", "enter Green"]);
        assert_eq!(machine.previous(), Some(Light::Red));
        assert_eq!(machine.ticks_in_state(), 0);
        assert_eq!(machine.transition_count(), 2);
    }

    #[test]
    fn restarting_forces_exit_and_enter() {
        let mut machine = machine();
        let mut host = Crossing::default();
        machine.set_starting_state(Light::Red, &mut host).unwrap();
        machine.set_starting_state(Light::Red, &mut host).unwrap();

        assert_eq!(host.events, ["init Red", "enter Red", "exit Red", "enter Red"]);
        assert_eq!(machine.len(), 1);
    }

    #[test]
    fn rejects_invalid_delta_time() {
        let mut machine = machine();
        let mut host = Crossing::default();
        machine.set_starting_state(Light::Red, &mut host).unwrap();

        assert!(matches!(
            machine.advance(&mut host, f32::NAN),
            Err(MachineError::InvalidDeltaTime(_))
        ));
        assert_eq!(machine.ticks_in_state(), 0);
    }

    #[test]
    fn builder_enters_starting_state() {
        let mut host = Crossing::default();
        let machine = StateMachine::builder()
            .state(Light::Green, || Lamp {
                me: Light::Green,
                next: Light::Red,
                updates: 0,
            })
            .starting_state(Light::Green)
            .build(&mut host)
            .unwrap();

        assert_eq!(machine.current(), Some(Light::Green));
        assert_eq!(host.events, ["init Green", "enter Green"]);
    }
}
