//! Page lifecycle and the bounded highlight retry schedule
//!
//! Highlighting runs when the document is parsed, again on `load`, and then a
//! fixed number of times after `load` to catch code blocks inserted late. The
//! retries are chained: each one reports how long to wait for the next, and
//! the chain ends when the offsets run out.
//!
//! Lifecycle: Idle → (Ready) → Loaded/Armed → retries… → Exhausted

use serde::{Deserialize, Serialize};

/// Default retry offsets in milliseconds after `load`
pub const DEFAULT_RETRY_DELAYS_MS: [u32; 2] = [100, 500];

// =============================================================================
// RetrySchedule
// =============================================================================

/// Fixed, finite list of retry offsets measured from `load`
#[derive(Debug, Clone, PartialEq)]
pub struct RetrySchedule {
    offsets: Vec<u32>,
    fired: usize,
}

impl Default for RetrySchedule {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_DELAYS_MS.to_vec())
    }
}

impl RetrySchedule {
    /// Offsets are sorted and deduplicated
    pub fn new(mut offsets: Vec<u32>) -> Self {
        offsets.sort_unstable();
        offsets.dedup();
        Self { offsets, fired: 0 }
    }

    /// Wait before the next retry, relative to the previous one (or to `load`
    /// for the first). `None` once every offset has been handed out.
    pub fn next_delay(&mut self) -> Option<u32> {
        let offset = *self.offsets.get(self.fired)?;
        let previous = if self.fired == 0 { 0 } else { self.offsets[self.fired - 1] };
        self.fired += 1;
        Some(offset - previous)
    }

    pub fn remaining(&self) -> usize {
        self.offsets.len() - self.fired
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Page events that can trigger a highlight pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEvent {
    /// `DOMContentLoaded`, or the document was already parsed at install time
    Ready,
    /// window `load`
    Loaded,
    /// A scheduled retry fired
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed,
    Exhausted,
}

/// What the host should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifecycleStep {
    /// Run a highlight pass now
    pub run_pass: bool,
    /// Schedule a `Retry` after this many milliseconds
    pub next_retry_ms: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Lifecycle {
    schedule: RetrySchedule,
    phase: Phase,
    passes: usize,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new(RetrySchedule::default())
    }
}

impl Lifecycle {
    pub fn new(schedule: RetrySchedule) -> Self {
        Self {
            schedule,
            phase: Phase::Idle,
            passes: 0,
        }
    }

    pub fn on_event(&mut self, event: PageEvent) -> LifecycleStep {
        let step = match (event, self.phase) {
            (PageEvent::Ready, _) => LifecycleStep { run_pass: true, next_retry_ms: None },
            (PageEvent::Loaded, Phase::Idle) => {
                let next_retry_ms = self.schedule.next_delay();
                self.phase = if next_retry_ms.is_some() { Phase::Armed } else { Phase::Exhausted };
                LifecycleStep { run_pass: true, next_retry_ms }
            }
            // `load` only arms the schedule once
            (PageEvent::Loaded, _) => LifecycleStep { run_pass: true, next_retry_ms: None },
            (PageEvent::Retry, Phase::Armed) => {
                let next_retry_ms = self.schedule.next_delay();
                if next_retry_ms.is_none() {
                    self.phase = Phase::Exhausted;
                }
                LifecycleStep { run_pass: true, next_retry_ms }
            }
            (PageEvent::Retry, _) => LifecycleStep::default(),
        };
        if step.run_pass {
            self.passes += 1;
        }
        step
    }

    /// Number of passes requested so far
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn state_name(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "idle",
            Phase::Armed => "armed",
            Phase::Exhausted => "exhausted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_is_relative() {
        let mut schedule = RetrySchedule::default();
        assert_eq!(schedule.next_delay(), Some(100));
        assert_eq!(schedule.next_delay(), Some(400));
        assert_eq!(schedule.next_delay(), None);
        assert!(schedule.is_exhausted());
    }

    #[test]
    fn test_schedule_sorts_and_dedups() {
        let schedule = RetrySchedule::new(vec![500, 100, 500, 0]);
        assert_eq!(schedule.offsets(), &[0, 100, 500]);
        assert_eq!(schedule.remaining(), 3);
    }

    #[test]
    fn test_ready_runs_pass_without_retry() {
        let mut lc = Lifecycle::default();
        assert_eq!(lc.on_event(PageEvent::Ready), LifecycleStep { run_pass: true, next_retry_ms: None });
        assert_eq!(lc.state_name(), "idle");
    }

    #[test]
    fn test_full_chain() {
        let mut lc = Lifecycle::default();
        lc.on_event(PageEvent::Ready);

        let step = lc.on_event(PageEvent::Loaded);
        assert!(step.run_pass);
        assert_eq!(step.next_retry_ms, Some(100));
        assert_eq!(lc.state_name(), "armed");

        assert_eq!(lc.on_event(PageEvent::Retry).next_retry_ms, Some(400));
        let last = lc.on_event(PageEvent::Retry);
        assert!(last.run_pass);
        assert_eq!(last.next_retry_ms, None);
        assert_eq!(lc.state_name(), "exhausted");

        // Ready + Loaded + two retries
        assert_eq!(lc.passes(), 4);
    }

    #[test]
    fn test_stray_retry_ignored() {
        let mut lc = Lifecycle::default();
        assert_eq!(lc.on_event(PageEvent::Retry), LifecycleStep::default());
        assert_eq!(lc.passes(), 0);
    }

    #[test]
    fn test_second_load_does_not_rearm() {
        let mut lc = Lifecycle::default();
        lc.on_event(PageEvent::Loaded);
        let again = lc.on_event(PageEvent::Loaded);
        assert!(again.run_pass);
        assert_eq!(again.next_retry_ms, None);
    }

    #[test]
    fn test_empty_schedule_exhausts_on_load() {
        let mut lc = Lifecycle::new(RetrySchedule::new(Vec::new()));
        let step = lc.on_event(PageEvent::Loaded);
        assert!(step.run_pass);
        assert_eq!(step.next_retry_ms, None);
        assert_eq!(lc.state_name(), "exhausted");
        assert_eq!(lc.on_event(PageEvent::Retry), LifecycleStep::default());
    }
}
