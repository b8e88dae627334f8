use tracing::trace;

use crate::task::TaskId;

/// Source of task identifiers.
///
/// Implementations never hand out the same id twice, and never hand out an
/// id they have been told is taken through [`IdGenerator::observe`]. Once
/// the id space above the largest known id is used up they return `None`.
pub trait IdGenerator {
    fn next_id(&mut self) -> Option<TaskId>;

    /// Records an id that already exists so later ids sort after it.
    fn observe(&mut self, existing: TaskId);
}

pub trait Clock {
    fn now_millis(&self) -> u64;
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    fn now_millis(&self) -> u64 {
        self()
    }
}

/// Millisecond-timestamp ids that stay strictly increasing even when two
/// tasks land in the same clock tick or the clock steps backwards.
#[derive(Debug, Clone)]
pub struct MonotonicIds<C> {
    clock: C,
    last: Option<u64>,
}

impl<C: Clock> MonotonicIds<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, last: None }
    }
}

impl<C: Clock> IdGenerator for MonotonicIds<C> {
    fn next_id(&mut self) -> Option<TaskId> {
        let now = self.clock.now_millis();
        let next = match self.last {
            Some(last) => now.max(last.checked_add(1)?),
            None => now,
        };
        trace!(now, next, "issued task id");
        self.last = Some(next);
        Some(TaskId(next))
    }

    fn observe(&mut self, existing: TaskId) {
        self.last = Some(self.last.map_or(existing.0, |last| last.max(existing.0)));
    }
}

/// Plain counter, handy where ids should be predictable.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: Option<u64>,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Option<TaskId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(TaskId(id))
    }

    fn observe(&mut self, existing: TaskId) {
        let after = existing.0.checked_add(1);
        self.next = match (self.next, after) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }
}
