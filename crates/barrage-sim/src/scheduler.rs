//! Deadline registry for deferred and repeating callbacks.
//!
//! Every timer is keyed by an absolute match-time deadline and optionally
//! tagged with the entity that owns it. Due timers are drained once per frame
//! inside the single update pass; nothing runs on another thread. Removing an
//! owner cancels its timers, and dispatchers must still re-check that the
//! owner is active before acting.

use hecs::Entity;

pub type TimerId = u64;

/// What a timer does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Owner enemy fires at the player.
    EnemyFire,
    /// Owner player's invulnerability window ends.
    InvulnerabilityExpiry,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    owner: Option<Entity>,
    kind: TimerKind,
    deadline_ms: f64,
    repeat_ms: Option<f64>,
}

/// A timer that came due this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DueTimer {
    pub id: TimerId,
    pub owner: Option<Entity>,
    pub kind: TimerKind,
    pub deadline_ms: f64,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<Timer>,
    next_id: TimerId,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot timer.
    pub fn once(&mut self, owner: Option<Entity>, kind: TimerKind, deadline_ms: f64) -> TimerId {
        self.push(owner, kind, deadline_ms, None)
    }

    /// Schedule a timer that re-arms every `interval_ms` after `first_deadline_ms`.
    pub fn repeating(
        &mut self,
        owner: Option<Entity>,
        kind: TimerKind,
        first_deadline_ms: f64,
        interval_ms: f64,
    ) -> TimerId {
        self.push(owner, kind, first_deadline_ms, Some(interval_ms.max(1.0)))
    }

    pub fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    /// Cancel every timer owned by `owner`. Returns how many were removed.
    pub fn cancel_owner(&mut self, owner: Entity) -> usize {
        let before = self.timers.len();
        self.timers.retain(|t| t.owner != Some(owner));
        before - self.timers.len()
    }

    /// Number of pending timers owned by `owner`.
    pub fn pending_for(&self, owner: Entity) -> usize {
        self.timers.iter().filter(|t| t.owner == Some(owner)).count()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Remove and return every timer whose deadline has passed, in deadline
    /// order. Repeating timers are re-armed; each fires at most once per call,
    /// so a long frame never produces a burst of catch-up callbacks.
    pub fn pop_due(&mut self, now_ms: f64) -> Vec<DueTimer> {
        let mut due: Vec<DueTimer> = Vec::new();

        self.timers.retain_mut(|timer| {
            if timer.deadline_ms > now_ms {
                return true;
            }
            due.push(DueTimer {
                id: timer.id,
                owner: timer.owner,
                kind: timer.kind,
                deadline_ms: timer.deadline_ms,
            });
            match timer.repeat_ms {
                Some(interval) => {
                    timer.deadline_ms += interval;
                    if timer.deadline_ms <= now_ms {
                        timer.deadline_ms = now_ms + interval;
                    }
                    true
                }
                None => false,
            }
        });

        due.sort_by(|a, b| a.deadline_ms.total_cmp(&b.deadline_ms));
        due
    }

    fn push(
        &mut self,
        owner: Option<Entity>,
        kind: TimerKind,
        deadline_ms: f64,
        repeat_ms: Option<f64>,
    ) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            owner,
            kind,
            deadline_ms,
            repeat_ms,
        });
        id
    }
}
