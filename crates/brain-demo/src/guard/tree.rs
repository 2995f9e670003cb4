//! Guard behavior as a behavior tree.
//!
//! ```text
//! guard (selector)
//!   ├─ rest (sequence)
//!   │   ├─ exhausted?
//!   │   └─ recover          ← in progress until stamina is full
//!   ├─ pursue (sequence)
//!   │   ├─ intruder_visible?
//!   │   └─ chase            ← in progress until caught, fails if lost
//!   └─ patrol
//! ```

use behavior_tree::builder::{action, condition, selector, sequence};
use behavior_tree::{Behavior, Node, Status};

use super::Guard;

/// Patrol leaf keeping its heading between ticks.
#[derive(Debug)]
pub struct PatrolRoute {
    heading: f32,
}

impl Default for PatrolRoute {
    fn default() -> Self {
        Self { heading: 1.0 }
    }
}

impl Behavior<Guard> for PatrolRoute {
    fn init(&mut self, guard: &mut Guard) {
        if guard.position >= Guard::ROUTE.1 {
            self.heading = -1.0;
        }
    }

    fn process(&mut self, guard: &mut Guard, dt: f32) -> Status {
        self.heading = guard.patrol_step(self.heading, dt);
        Status::Success
    }

    fn debug_string(&self) -> String {
        format!("patrol heading={}", self.heading)
    }
}

/// Root of the guard tree.
pub fn guard_tree() -> Node<Guard> {
    selector(
        "guard",
        vec![
            sequence(
                "rest",
                vec![
                    condition("exhausted", Guard::is_exhausted),
                    action("recover", |guard: &mut Guard, dt| {
                        if guard.rest_step(dt) {
                            Status::Success
                        } else {
                            Status::InProgress
                        }
                    }),
                ],
            ),
            sequence(
                "pursue",
                vec![
                    condition("intruder_visible", Guard::sees_intruder),
                    action("chase", |guard: &mut Guard, dt| {
                        let Some(target) = guard.intruder else {
                            return Status::Failure;
                        };
                        if guard.chase_step(target, dt) {
                            Status::Success
                        } else {
                            Status::InProgress
                        }
                    }),
                ],
            ),
            Node::leaf("patrol", PatrolRoute::default()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use behavior_tree::BehaviorTree;

    #[test]
    fn resting_guard_ignores_intruder_until_recovered() {
        let mut guard = Guard {
            stamina: 1.0,
            intruder: Some(5.0),
            ..Guard::default()
        };
        let mut tree = BehaviorTree::new(guard_tree, &mut guard);

        assert_eq!(tree.evaluate(&mut guard, 0.5), Ok(Status::InProgress));
        assert_eq!(tree.root().cursor(), Some(0));
        for _ in 0..4 {
            assert_eq!(tree.evaluate(&mut guard, 0.5), Ok(Status::InProgress));
        }
        // Stamina is full on the sixth recover tick; the selector succeeds
        // without looking at the pursuit branch.
        assert_eq!(tree.evaluate(&mut guard, 0.5), Ok(Status::Success));
        assert_eq!(guard.position, 0.0);

        // Next tick the guard is rested and goes after the intruder.
        assert_eq!(tree.evaluate(&mut guard, 0.5), Ok(Status::InProgress));
        assert_eq!(tree.root().cursor(), Some(1));
        assert!(guard.position > 0.0);
    }

    #[test]
    fn lost_intruder_falls_back_to_patrol() {
        let mut guard = Guard {
            intruder: Some(8.0),
            ..Guard::default()
        };
        let mut tree = BehaviorTree::new(guard_tree, &mut guard);

        assert_eq!(tree.evaluate(&mut guard, 0.1), Ok(Status::InProgress));
        guard.intruder = None;

        // Chase fails, pursue resets, patrol runs in the same tick.
        assert_eq!(tree.evaluate(&mut guard, 0.1), Ok(Status::Success));
        assert_eq!(tree.root().cursor(), Some(0));
        assert_eq!(tree.root().children()[1].last_status(), Some(Status::Failure));
        assert_eq!(tree.root().children()[2].last_status(), Some(Status::Success));
    }
}
