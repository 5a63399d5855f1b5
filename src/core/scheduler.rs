//! One-shot delayed tasks driven by an explicit clock.
//!
//! The event loop advances the clock with wall time; tests advance it by hand.
//! Due tasks come out in deadline order, ties in the order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Handle returned for every scheduled task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    token: CancellationToken,
    deadline: Duration,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

struct Scheduled<T> {
    deadline: Duration,
    seq: u64,
    token: CancellationToken,
    payload: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    // BinaryHeap is a max-heap; reverse so the earliest task sits on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `payload` once, `delay` after the current virtual time.
    pub fn schedule_after(&mut self, delay: Duration, payload: T) -> TaskHandle {
        let deadline = self.now + delay;
        let token = CancellationToken::new();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled {
            deadline,
            seq,
            token: token.clone(),
            payload,
        });
        TaskHandle { token, deadline }
    }

    /// Move the clock forward by `delta` and collect everything that became due.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<T> {
        let target = self.now + delta;
        self.advance_to(target)
    }

    /// Move the clock to `now` (never backwards) and collect due payloads.
    pub fn advance_to(&mut self, now: Duration) -> Vec<T> {
        if now > self.now {
            self.now = now;
        }
        let mut due = Vec::new();
        while let Some(top) = self.queue.peek() {
            if top.deadline > self.now {
                break;
            }
            if let Some(task) = self.queue.pop() {
                if !task.token.is_cancelled() {
                    due.push(task.payload);
                }
            }
        }
        due
    }

    /// Earliest deadline still waiting, ignoring cancelled tasks.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue
            .iter()
            .filter(|task| !task.token.is_cancelled())
            .map(|task| task.deadline)
            .min()
    }

    /// Tasks that have not fired and were not cancelled.
    pub fn pending(&self) -> usize {
        self.queue
            .iter()
            .filter(|task| !task.token.is_cancelled())
            .count()
    }
}
