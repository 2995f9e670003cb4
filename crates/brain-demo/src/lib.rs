//! Demo host for the `state-machine` and `behavior-tree` crates.
//!
//! A [`guard::Guard`] patrols a route, chases an intruder that shows up for
//! a while and rests when exhausted. The same scenario can be driven by a
//! state machine, a behavior tree, or both for comparison.

pub mod config;
pub mod guard;
pub mod logging;

use anyhow::{Context, Result};
use behavior_tree::BehaviorTree;

pub use config::{DemoConfig, Strategy};
use guard::{Guard, IntruderSchedule};

/// Outcome of one simulated run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub strategy: Strategy,
    pub ticks: u32,
    pub catches: u32,
    pub position: f32,
    pub stamina: f32,
    /// Debug string of the final state, or the tree's last status.
    pub last: String,
}

/// Runs every strategy selected by `config` on a fresh guard.
pub fn run(config: &DemoConfig) -> Result<Vec<RunSummary>> {
    let mut summaries = Vec::new();

    if config.strategy.runs_fsm() {
        summaries.push(run_fsm(config, IntruderSchedule::default())?);
    }
    if config.strategy.runs_tree() {
        summaries.push(run_tree(config, IntruderSchedule::default())?);
    }

    Ok(summaries)
}

/// Drives a guard with the state machine for `config.ticks` ticks.
pub fn run_fsm(config: &DemoConfig, schedule: IntruderSchedule) -> Result<RunSummary> {
    let dt = config.delta_time();
    let mut guard = Guard::new(schedule);
    let mut machine = guard::guard_machine(&mut guard).context("failed to build guard machine")?;

    for tick in 0..config.ticks {
        guard.observe(dt);
        let mode = machine
            .advance(&mut guard, dt)
            .with_context(|| format!("state machine failed on tick {tick}"))?;
        tracing::debug!(tick, %mode, position = guard.position, stamina = guard.stamina, "fsm tick");
    }

    let summary = RunSummary {
        strategy: Strategy::Fsm,
        ticks: config.ticks,
        catches: guard.catches,
        position: guard.position,
        stamina: guard.stamina,
        last: machine.current_debug_string().unwrap_or_default(),
    };
    tracing::info!(
        "fsm run done: catches={} transitions={} final={:?}",
        summary.catches,
        machine.transition_count(),
        summary.last
    );
    Ok(summary)
}

/// Drives a guard with the behavior tree for `config.ticks` ticks.
pub fn run_tree(config: &DemoConfig, schedule: IntruderSchedule) -> Result<RunSummary> {
    let dt = config.delta_time();
    let mut guard = Guard::new(schedule);
    let mut tree = BehaviorTree::new(guard::guard_tree, &mut guard);

    for tick in 0..config.ticks {
        guard.observe(dt);
        let status = tree
            .evaluate(&mut guard, dt)
            .with_context(|| format!("behavior tree failed on tick {tick}"))?;
        tracing::debug!(tick, %status, position = guard.position, stamina = guard.stamina, "tree tick");
    }
    tracing::debug!("final tree:\n{}", tree.describe());

    let summary = RunSummary {
        strategy: Strategy::Tree,
        ticks: config.ticks,
        catches: guard.catches,
        position: guard.position,
        stamina: guard.stamina,
        last: tree
            .last_status()
            .map(|status| status.to_string())
            .unwrap_or_default(),
    };
    tracing::info!(
        "tree run done: catches={} evaluations={} final={:?}",
        summary.catches,
        tree.evaluations(),
        summary.last
    );
    Ok(summary)
}
