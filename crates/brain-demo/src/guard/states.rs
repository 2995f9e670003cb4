//! Guard behavior as a finite state machine.

use state_machine::{MachineError, State, StateMachine};

use super::Guard;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum GuardMode {
    Patrol,
    Chase,
    Rest,
}

/// Walks the route back and forth. Heading and completed legs survive
/// leaving the state, so a patrol resumes where it was interrupted.
#[derive(Debug)]
pub struct Patrol {
    heading: f32,
    legs: u32,
}

impl Default for Patrol {
    fn default() -> Self {
        Self {
            heading: 1.0,
            legs: 0,
        }
    }
}

impl State<GuardMode, Guard> for Patrol {
    fn on_update(&mut self, guard: &mut Guard, dt: f32) -> Option<GuardMode> {
        if guard.sees_intruder() {
            return Some(GuardMode::Chase);
        }
        if guard.is_exhausted() {
            return Some(GuardMode::Rest);
        }

        let heading = guard.patrol_step(self.heading, dt);
        if heading != self.heading {
            self.legs += 1;
            self.heading = heading;
        }
        Some(GuardMode::Patrol)
    }

    fn debug_string(&self) -> String {
        format!("patrol heading={} legs={}", self.heading, self.legs)
    }
}

#[derive(Debug, Default)]
pub struct Chase {
    pursuit_time: f32,
}

impl State<GuardMode, Guard> for Chase {
    fn on_enter(&mut self, _guard: &mut Guard) {
        self.pursuit_time = 0.0;
    }

    fn on_update(&mut self, guard: &mut Guard, dt: f32) -> Option<GuardMode> {
        let Some(target) = guard.intruder else {
            return Some(GuardMode::Patrol);
        };

        self.pursuit_time += dt;
        if guard.chase_step(target, dt) {
            return Some(GuardMode::Patrol);
        }
        guard.is_exhausted().then_some(GuardMode::Rest)
    }

    fn debug_string(&self) -> String {
        format!("chase for {:.1}s", self.pursuit_time)
    }
}

#[derive(Debug, Default)]
pub struct Rest {
    naps: u32,
}

impl State<GuardMode, Guard> for Rest {
    fn on_enter(&mut self, _guard: &mut Guard) {
        self.naps += 1;
    }

    fn on_update(&mut self, guard: &mut Guard, dt: f32) -> Option<GuardMode> {
        guard.rest_step(dt).then_some(GuardMode::Patrol)
    }

    fn debug_string(&self) -> String {
        format!("rest (nap #{})", self.naps)
    }
}

/// Builds the guard machine, starting in [`GuardMode::Patrol`].
///
/// Only the starting state is created up front; the others are built the
/// first time a transition asks for them.
pub fn guard_machine(guard: &mut Guard) -> Result<StateMachine<GuardMode, Guard>, MachineError> {
    StateMachine::builder()
        .state(GuardMode::Patrol, Patrol::default)
        .state(GuardMode::Chase, Chase::default)
        .state(GuardMode::Rest, Rest::default)
        .starting_state(GuardMode::Patrol)
        .build(guard)
}
