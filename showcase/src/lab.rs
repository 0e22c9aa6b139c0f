use std::time::{Duration, Instant};

use synthetic::{
    Algorithm, HyperparameterSet, Jitter, ParamSpec, ParamValue, Run, compute, training_delay,
};

use crate::{
    config::ShowcaseConfig,
    error::{Result, ShowcaseErr},
    tabs::TabBar,
};

const MAX_EVENTS: usize = 50;

/// Where a session's run is at.
#[derive(Debug, Clone, PartialEq)]
pub enum RunState {
    Idle,
    /// The result is already computed and held back until `ready_at`.
    Running {
        started: Instant,
        ready_at: Instant,
        pending: Box<Run>,
    },
    Done(Box<Run>),
}

/// One algorithm tab: its sliders and its latest run.
#[derive(Debug, Clone)]
pub struct LabSession {
    params: HyperparameterSet,
    defaults: HyperparameterSet,
    selected: usize,
    state: RunState,
    runs: u32,
}

impl LabSession {
    /// Creates a new idle `LabSession`.
    ///
    /// # Arguments
    /// * `params` - The starting values, also what `reset` goes back to.
    pub fn new(params: HyperparameterSet) -> Self {
        Self {
            defaults: params.clone(),
            params,
            selected: 0,
            state: RunState::Idle,
            runs: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.params.algorithm()
    }

    pub fn params(&self) -> &HyperparameterSet {
        &self.params
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// How many runs this session has completed.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running { .. })
    }

    /// The latest completed run.
    pub fn result(&self) -> Option<&Run> {
        match &self.state {
            RunState::Done(run) => Some(run.as_ref()),
            _ => None,
        }
    }

    /// Fraction of the simulated training time that has passed.
    pub fn progress(&self, now: Instant) -> Option<f64> {
        let RunState::Running {
            started, ready_at, ..
        } = &self.state
        else {
            return None;
        };

        let total = ready_at.saturating_duration_since(*started).as_secs_f64();
        if total == 0.0 {
            return Some(1.0);
        }
        let passed = now.saturating_duration_since(*started).as_secs_f64();
        Some((passed / total).clamp(0.0, 1.0))
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_param(&self) -> Option<(&'static ParamSpec, ParamValue)> {
        self.params.values().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.params.specs().len();
        self.selected = (self.selected + 1) % len;
    }

    pub fn select_previous(&mut self) {
        let len = self.params.specs().len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Moves the selected slider. Numbers stop at their bounds, choices
    /// cycle.
    pub fn nudge(&mut self, steps: i32) {
        self.params.nudge(self.selected, steps);
    }

    /// Validates and stores a single value.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<()> {
        self.params.set_str(name, raw)?;
        Ok(())
    }

    /// Puts every slider back where the session started.
    pub fn reset(&mut self) {
        self.params = self.defaults.clone();
    }

    /// Starts a run with the current hyperparameters.
    ///
    /// # Arguments
    /// * `now` - The current instant.
    /// * `jitter` - Noise source for the chart.
    /// * `simulate_delay` - Whether to hold the result back for the
    ///   simulated training time. Without it the run is done immediately.
    ///
    /// # Returns
    /// How long the run will appear to take, or an error if a run is
    /// already in progress.
    pub fn start(
        &mut self,
        now: Instant,
        jitter: &mut Jitter,
        simulate_delay: bool,
    ) -> Result<Duration> {
        if self.is_running() {
            return Err(ShowcaseErr::AlreadyRunning(self.algorithm()));
        }

        let run = Box::new(compute(&self.params, jitter));
        let delay = if simulate_delay {
            training_delay(&self.params)
        } else {
            Duration::ZERO
        };

        log::info!(
            algorithm = self.algorithm().id(),
            delay_ms = delay.as_millis() as u64;
            "run started"
        );

        if delay.is_zero() {
            self.finish(run);
        } else {
            self.state = RunState::Running {
                started: now,
                ready_at: now + delay,
                pending: run,
            };
        }

        Ok(delay)
    }

    /// Completes the run once its delay has elapsed.
    ///
    /// # Returns
    /// Whether a run finished during this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        let ready = matches!(&self.state, RunState::Running { ready_at, .. } if now >= *ready_at);
        if !ready {
            return false;
        }

        match std::mem::replace(&mut self.state, RunState::Idle) {
            RunState::Running { pending, .. } => {
                self.finish(pending);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    fn finish(&mut self, run: Box<Run>) {
        self.runs += 1;
        log::info!(
            algorithm = self.algorithm().id(),
            primary = run.metrics.primary.value;
            "run finished"
        );
        self.state = RunState::Done(run);
    }
}

/// A line in the lab's activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabEvent {
    pub algorithm: Algorithm,
    pub message: String,
}

/// Every algorithm session plus the tab bar choosing between them.
pub struct Lab {
    sessions: Vec<LabSession>,
    tabs: TabBar<Algorithm>,
    jitter: Jitter,
    simulate_delay: bool,
    events: Vec<LabEvent>,
}

impl Lab {
    /// Builds the lab described by `config`.
    pub fn new(config: &ShowcaseConfig) -> Result<Self> {
        let jitter = if config.jitter {
            Jitter::new(config.seed)
        } else {
            Jitter::none()
        };

        let sessions = Algorithm::ALL
            .iter()
            .map(|a| config.params_for(*a).map(LabSession::new))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::with_sessions(sessions, jitter, config.delay))
    }

    /// Builds a lab from explicit parts.
    ///
    /// Sessions may come in any order. An algorithm without a session starts
    /// from its defaults and, when one appears twice, the last session wins.
    pub fn with_sessions(sessions: Vec<LabSession>, jitter: Jitter, simulate_delay: bool) -> Self {
        let mut slots: Vec<Option<LabSession>> = Algorithm::ALL.iter().map(|_| None).collect();
        for session in sessions {
            let index = session.algorithm().index();
            slots[index] = Some(session);
        }

        let sessions = Algorithm::ALL
            .iter()
            .zip(slots)
            .map(|(algorithm, slot)| {
                slot.unwrap_or_else(|| LabSession::new(HyperparameterSet::defaults(*algorithm)))
            })
            .collect();

        Self {
            sessions,
            tabs: TabBar::new(&Algorithm::ALL),
            jitter,
            simulate_delay,
            events: Vec::new(),
        }
    }

    pub fn tabs(&self) -> &TabBar<Algorithm> {
        &self.tabs
    }

    pub fn next_tab(&mut self) {
        self.tabs.next();
    }

    pub fn previous_tab(&mut self) {
        self.tabs.previous();
    }

    pub fn select(&mut self, algorithm: Algorithm) {
        self.tabs.select(algorithm);
    }

    pub fn session(&self, algorithm: Algorithm) -> &LabSession {
        &self.sessions[algorithm.index()]
    }

    pub fn session_mut(&mut self, algorithm: Algorithm) -> &mut LabSession {
        &mut self.sessions[algorithm.index()]
    }

    pub fn active(&self) -> &LabSession {
        self.session(self.tabs.active())
    }

    pub fn active_mut(&mut self) -> &mut LabSession {
        self.session_mut(self.tabs.active())
    }

    pub fn events(&self) -> &[LabEvent] {
        &self.events
    }

    /// Starts a run on `algorithm`'s session.
    pub fn start(&mut self, algorithm: Algorithm, now: Instant) -> Result<Duration> {
        let session = &mut self.sessions[algorithm.index()];
        let delay = session.start(now, &mut self.jitter, self.simulate_delay)?;

        let message = if delay.is_zero() {
            "run complete".to_string()
        } else {
            format!("training... ({:.1}s)", delay.as_secs_f64())
        };
        self.push_event(algorithm, message);
        Ok(delay)
    }

    pub fn start_active(&mut self, now: Instant) -> Result<Duration> {
        self.start(self.tabs.active(), now)
    }

    /// Advances every running session.
    ///
    /// # Returns
    /// The algorithms whose run finished during this call.
    pub fn tick(&mut self, now: Instant) -> Vec<Algorithm> {
        let finished: Vec<Algorithm> = self
            .sessions
            .iter_mut()
            .filter_map(|s| s.tick(now).then(|| s.algorithm()))
            .collect();

        for algorithm in &finished {
            let summary = self
                .session(*algorithm)
                .result()
                .map(|run| {
                    let primary = run.metrics.primary;
                    format!("run complete: {} = {:.3}", primary.name, primary.value)
                })
                .unwrap_or_else(|| "run complete".to_string());
            self.push_event(*algorithm, summary);
        }

        finished
    }

    pub fn running(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.sessions
            .iter()
            .filter(|s| s.is_running())
            .map(LabSession::algorithm)
    }

    fn push_event(&mut self, algorithm: Algorithm, message: String) {
        self.events.push(LabEvent { algorithm, message });
        if self.events.len() > MAX_EVENTS {
            let drain = self.events.len() - MAX_EVENTS;
            self.events.drain(0..drain);
        }
    }
}
