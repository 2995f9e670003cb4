//! End-to-end evaluation through `BehaviorTree`.

use std::collections::VecDeque;

use behavior_tree::builder::{action, always_succeed, condition, inverter, selector, sequence};
use behavior_tree::{Behavior, BehaviorTree, Node, Status};

use Status::{Failure as F, InProgress as P, Success as S};

#[derive(Default)]
struct Host {
    log: Vec<String>,
    distance: f32,
}

struct Scripted {
    label: &'static str,
    script: VecDeque<Status>,
    fallback: Status,
}

fn scripted(label: &'static str, script: &[Status]) -> Node<Host> {
    Node::leaf(
        label,
        Scripted {
            label,
            script: script.iter().copied().collect(),
            fallback: *script.last().unwrap_or(&F),
        },
    )
}

impl Behavior<Host> for Scripted {
    fn process(&mut self, host: &mut Host, _dt: f32) -> Status {
        host.log.push(self.label.to_string());
        self.script.pop_front().unwrap_or(self.fallback)
    }

    fn debug_string(&self) -> String {
        format!("{} ({} scripted)", self.label, self.script.len())
    }
}

#[test]
fn sequence_with_failure_resolves_in_one_tick() {
    let mut host = Host::default();
    let mut tree = BehaviorTree::new(
        || {
            sequence(
                "root",
                vec![
                    scripted("a", &[S]),
                    scripted("b", &[S]),
                    scripted("c", &[F]),
                    scripted("d", &[S]),
                ],
            )
        },
        &mut host,
    );

    assert_eq!(tree.evaluate(&mut host, 0.1), Ok(F));
    assert_eq!(host.log, ["a", "b", "c"]);
    assert_eq!(tree.root().cursor(), Some(0));

    let children = tree.root().children();
    assert_eq!(children[0].last_status(), Some(S));
    assert_eq!(children[2].last_status(), Some(F));
    assert_eq!(children[3].last_status(), None);
}

#[test]
fn sequence_holds_progress_across_ticks() {
    let mut host = Host::default();
    let mut tree = BehaviorTree::new(
        || sequence("root", vec![scripted("a", &[S]), scripted("b", &[P, S]), scripted("c", &[S])]),
        &mut host,
    );

    assert_eq!(tree.evaluate(&mut host, 0.1), Ok(P));
    assert_eq!(tree.root().cursor(), Some(1));

    assert_eq!(tree.evaluate(&mut host, 0.1), Ok(S));
    assert_eq!(host.log, ["a", "b", "b", "c"]);
    assert_eq!(tree.root().cursor(), Some(0));
    assert_eq!(tree.last_status(), Some(S));
}

#[test]
fn selector_walks_past_failures_in_one_tick() {
    let mut host = Host::default();
    let mut tree = BehaviorTree::new(
        || selector("root", vec![scripted("a", &[F]), scripted("b", &[F]), scripted("c", &[S])]),
        &mut host,
    );

    assert_eq!(tree.evaluate(&mut host, 0.1), Ok(S));
    assert_eq!(host.log, ["a", "b", "c"]);
    assert_eq!(tree.root().cursor(), Some(0));
}

#[test]
fn empty_composites_are_identity_elements() {
    let mut host = Host::default();
    let mut empty_seq = BehaviorTree::new(|| sequence("seq", Vec::new()), &mut host);
    let mut empty_sel = BehaviorTree::new(|| selector("sel", Vec::new()), &mut host);

    for _ in 0..3 {
        assert_eq!(empty_seq.evaluate(&mut host, 0.1), Ok(S));
        assert_eq!(empty_sel.evaluate(&mut host, 0.1), Ok(F));
    }
}

#[test]
fn nested_in_progress_resumes_inner_composite() {
    let mut host = Host::default();
    let mut tree = BehaviorTree::new(
        || {
            selector(
                "root",
                vec![
                    sequence("attack", vec![scripted("in_range", &[F, S]), scripted("strike", &[S])]),
                    sequence("approach", vec![scripted("path", &[S]), scripted("walk", &[P, S])]),
                ],
            )
        },
        &mut host,
    );

    // Tick 1: attack fails, approach starts walking.
    assert_eq!(tree.evaluate(&mut host, 0.1), Ok(P));
    assert_eq!(tree.root().cursor(), Some(1));
    assert_eq!(tree.root().children()[1].cursor(), Some(1));

    // Tick 2: the selector resumes the approach, not the attack.
    host.log.clear();
    assert_eq!(tree.evaluate(&mut host, 0.1), Ok(S));
    assert_eq!(host.log, ["walk"]);
    assert_eq!(tree.root().cursor(), Some(0));
}

#[test]
fn decorators_and_conditions_compose() {
    let mut host = Host {
        distance: 12.0,
        ..Host::default()
    };
    let mut tree = BehaviorTree::new(
        || {
            sequence(
                "root",
                vec![
                    inverter("not_close", condition("close", |h: &Host| h.distance < 2.0)),
                    always_succeed("optional", scripted("taunt", &[F])),
                    action("move", |h: &mut Host, dt| {
                        h.distance -= 10.0 * dt;
                        if h.distance <= 2.0 { S } else { P }
                    }),
                ],
            )
        },
        &mut host,
    );

    assert_eq!(tree.evaluate(&mut host, 0.5), Ok(P));
    assert_eq!(tree.evaluate(&mut host, 0.5), Ok(S));
    assert!(host.distance <= 2.0);
    assert_eq!(host.log, ["taunt"]);
}

#[test]
fn debug_strings_come_from_leaves() {
    let mut host = Host::default();
    let tree = BehaviorTree::new(|| sequence("root", vec![scripted("a", &[S, S])]), &mut host);

    assert_eq!(tree.root().children()[0].debug_string(), "a (2 scripted)");
    assert_eq!(tree.root().debug_string(), "sequence 0/1");
}
