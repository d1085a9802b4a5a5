//! Scripted, display-less runs.
//!
//! A script is one character per tick: `U`, `D`, `L` or `R` queue that turn
//! before the tick, `.` lets the snake fly straight. Whitespace is ignored.
//! Once the script runs out the snake keeps flying straight until it dies
//! or the tick limit is reached.

use anyhow::{bail, Result};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::game::{GameConfig, Simulation, Snapshot, TickStatus, TurnRequest};

/// How a headless run ended
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub snapshot: Snapshot,
}

impl HeadlessReport {
    pub fn summary(&self) -> String {
        let head = self.snapshot.head();
        let outcome = match self.snapshot.death {
            Some(collision) => format!("dead ({:?})", collision),
            None => "alive".to_string(),
        };
        format!(
            "{} after {} ticks | score {} | length {} | head ({}, {}, {}) | heading {} | up {}",
            outcome,
            self.ticks,
            self.snapshot.score,
            self.snapshot.body.len(),
            head.x,
            head.y,
            head.z,
            self.snapshot.heading,
            self.snapshot.up,
        )
    }
}

pub struct HeadlessMode {
    config: GameConfig,
    simulation: Simulation,
    script: Vec<Option<TurnRequest>>,
    max_ticks: Option<u64>,
    ticks: u64,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, script: &str, max_ticks: Option<u64>) -> Result<Self> {
        Ok(Self {
            simulation: Simulation::new(config.clone()),
            config,
            script: parse_script(script)?,
            max_ticks,
            ticks: 0,
        })
    }

    /// Run paced by the configured tick interval
    pub async fn run(&mut self) -> Result<HeadlessReport> {
        let mut tick_timer = interval(self.config.tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            script_len = self.script.len(),
            max_ticks = ?self.max_ticks,
            "headless_run_started"
        );

        loop {
            tick_timer.tick().await;
            if !self.step() {
                break;
            }
        }

        Ok(self.report())
    }

    /// Run as fast as possible
    pub fn run_to_end(&mut self) -> HeadlessReport {
        while self.step() {}
        self.report()
    }

    /// Feed this tick's script entry and tick once. Returns false when done.
    fn step(&mut self) -> bool {
        if self.max_ticks.is_some_and(|max| self.ticks >= max) {
            return false;
        }

        if let Some(Some(request)) = self.script.get(self.ticks as usize) {
            self.simulation.enqueue_turn(*request);
        }

        self.ticks += 1;
        self.simulation.tick() == TickStatus::Continue
    }

    fn report(&self) -> HeadlessReport {
        let report = HeadlessReport {
            ticks: self.ticks,
            snapshot: self.simulation.snapshot(),
        };
        info!(summary = %report.summary(), "headless_run_finished");
        report
    }
}

fn parse_script(script: &str) -> Result<Vec<Option<TurnRequest>>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(i, c)| match (c, TurnRequest::from_char(c)) {
            ('.', _) => Ok(None),
            (_, Some(request)) => Ok(Some(request)),
            (_, None) => bail!("invalid character {:?} at position {} in turn script", c, i),
        })
        .collect()
}
