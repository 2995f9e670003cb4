//! A patrolling guard used as the demo host.
//!
//! The same [`Guard`] can be driven either by the [`states`] machine or by
//! the [`tree`] behavior tree. Both use the movement and stamina helpers
//! below so their runs are directly comparable.

pub mod states;
pub mod tree;

pub use states::{GuardMode, guard_machine};
pub use tree::guard_tree;

/// Host object updated once per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Guard {
    pub position: f32,
    pub stamina: f32,
    /// Position of the visible intruder, if any.
    pub intruder: Option<f32>,
    pub catches: u32,
    /// Simulated seconds since the run started.
    pub elapsed: f32,
    pub schedule: IntruderSchedule,
}

/// When and where the intruder shows up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntruderSchedule {
    pub appears_at: f32,
    pub leaves_at: f32,
    pub position: f32,
}

impl Default for IntruderSchedule {
    fn default() -> Self {
        Self {
            appears_at: 3.0,
            leaves_at: 9.0,
            position: 14.0,
        }
    }
}

impl Guard {
    pub const MAX_STAMINA: f32 = 10.0;
    pub const EXHAUSTED_BELOW: f32 = 2.0;
    pub const PATROL_SPEED: f32 = 2.0;
    pub const CHASE_SPEED: f32 = 4.0;
    pub const PATROL_DRAIN: f32 = 0.5;
    pub const CHASE_DRAIN: f32 = 1.0;
    pub const RECOVERY_RATE: f32 = 3.0;
    pub const CATCH_RADIUS: f32 = 0.5;
    /// Patrol route endpoints.
    pub const ROUTE: (f32, f32) = (0.0, 10.0);

    pub fn new(schedule: IntruderSchedule) -> Self {
        Self {
            position: Self::ROUTE.0,
            stamina: Self::MAX_STAMINA,
            intruder: None,
            catches: 0,
            elapsed: 0.0,
            schedule,
        }
    }

    /// Advances the world clock and updates what the guard can see.
    ///
    /// Call before polling the decision engine each tick. An intruder that
    /// was caught does not come back.
    pub fn observe(&mut self, dt: f32) {
        self.elapsed += dt;
        let window = self.schedule.appears_at..self.schedule.leaves_at;
        self.intruder = (self.catches == 0 && window.contains(&self.elapsed))
            .then_some(self.schedule.position);
    }

    pub fn is_exhausted(&self) -> bool {
        self.stamina < Self::EXHAUSTED_BELOW
    }

    pub fn sees_intruder(&self) -> bool {
        self.intruder.is_some()
    }

    /// Moves one patrol step and returns the heading for the next step.
    pub fn patrol_step(&mut self, heading: f32, dt: f32) -> f32 {
        let (start, end) = Self::ROUTE;
        self.position = (self.position + heading * Self::PATROL_SPEED * dt).clamp(start, end);
        self.drain(Self::PATROL_DRAIN, dt);

        if self.position >= end {
            -1.0
        } else if self.position <= start {
            1.0
        } else {
            heading
        }
    }

    /// Moves toward the intruder; returns `true` once it is caught.
    pub fn chase_step(&mut self, target: f32, dt: f32) -> bool {
        let gap = target - self.position;
        let step = (Self::CHASE_SPEED * dt).min(gap.abs());
        self.position += step.copysign(gap);
        self.drain(Self::CHASE_DRAIN, dt);

        if (target - self.position).abs() < Self::CATCH_RADIUS {
            self.catches += 1;
            self.intruder = None;
            tracing::info!(position = self.position, "intruder caught");
            true
        } else {
            false
        }
    }

    /// Recovers stamina; returns `true` once it is full.
    pub fn rest_step(&mut self, dt: f32) -> bool {
        self.stamina = (self.stamina + Self::RECOVERY_RATE * dt).min(Self::MAX_STAMINA);
        self.stamina >= Self::MAX_STAMINA
    }

    fn drain(&mut self, rate: f32, dt: f32) {
        self.stamina = (self.stamina - rate * dt).max(0.0);
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::new(IntruderSchedule::default())
    }
}
