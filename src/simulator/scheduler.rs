//! Deferred actions with cancellation.
//!
//! The simulator paces some of its feedback: the automatic check fires a
//! moment after the last zone fills, and the level-completion bonus lands
//! after the results popup has had time to render. Instead of unmanaged
//! fire-and-forget timers, these are explicit scheduled tasks owned by
//! the session; resetting the panel or switching levels cancels whatever
//! is still pending, so a stale check can never fire against a board it
//! was not scheduled for.

use std::time::{Duration, Instant};

/// Handle to a scheduled task, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskToken(u64);

/// What a scheduled task does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Run `check_connections` (the automatic full-board check)
    AutoCheck,
    /// Award the completion bonus and unlock the next level
    CompleteLevel,
    /// Advance the quiz to its next question
    AdvanceQuiz,
}

#[derive(Debug)]
struct ScheduledTask {
    token: TaskToken,
    due: Instant,
    action: DeferredAction,
}

/// A single-threaded task queue drained from the event loop.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_token: u64,
}

impl Scheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to fire after `delay`, returning its token.
    pub fn schedule(&mut self, action: DeferredAction, delay: Duration) -> TaskToken {
        let token = TaskToken(self.next_token);
        self.next_token += 1;
        self.tasks.push(ScheduledTask {
            token,
            due: Instant::now() + delay,
            action,
        });
        token
    }

    /// Cancels the task with the given token, if it has not fired yet.
    pub fn cancel(&mut self, token: TaskToken) {
        self.tasks.retain(|task| task.token != token);
    }

    /// Cancels every pending task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Removes and returns the actions whose deadline has passed, in
    /// scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.tasks.retain(|task| {
            if task.due <= now {
                due.push(task.action);
                false
            } else {
                true
            }
        });
        due
    }

    /// Whether any task is still waiting to fire.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }
}
