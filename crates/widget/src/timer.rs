use crate::scheduler::SchedulerEvent;
use popify_utils::ISys;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// One-shot timers used by the `DisplayScheduler`.
///
/// A scheduled timer eventually results in a `SchedulerEvent::TimerFired`
/// carrying its id, unless it is cancelled first.
pub trait Timers {
    fn schedule(&mut self, delay: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Default)]
struct ManualTimersInner {
    epoch_millis: i64,
    elapsed_ms: u64,
    next_id: u64,
    /// (deadline in elapsed millis, timer)
    pending: Vec<(u64, TimerId)>,
}

/// Logical clock for driving a scheduler without real time passing.
///
/// Clones share the same clock. It also acts as the wall clock (`ISys`) so
/// that relative time labels move along with the timers: the wall time is
/// `epoch_millis` plus the elapsed logical time.
#[derive(Debug, Clone, Default)]
pub struct ManualTimers {
    inner: Arc<Mutex<ManualTimersInner>>,
}

impl ManualTimers {
    pub fn new(epoch_millis: i64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ManualTimersInner {
                epoch_millis,
                ..Default::default()
            })),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.inner.lock().unwrap().elapsed_ms
    }

    pub fn pending_count(&self) -> usize {
        self.inner.lock().unwrap().pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner
            .lock()
            .unwrap()
            .pending
            .iter()
            .any(|(_, pending)| *pending == id)
    }

    /// Removes the earliest timer due at or before `until_ms` and moves the
    /// clock to its deadline. Timers with equal deadlines fire in the order
    /// they were scheduled.
    pub fn fire_next_due(&self, until_ms: u64) -> Option<TimerId> {
        let mut inner = self.inner.lock().unwrap();
        let index = inner
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (deadline, _))| *deadline <= until_ms)
            .min_by_key(|(_, (deadline, id))| (*deadline, *id))
            .map(|(index, _)| index)?;
        let (deadline, id) = inner.pending.remove(index);
        inner.elapsed_ms = inner.elapsed_ms.max(deadline);
        Some(id)
    }

    /// Moves the clock forward without firing anything. Never moves backwards.
    pub fn set_elapsed(&self, elapsed_ms: u64) {
        let mut inner = self.inner.lock().unwrap();
        inner.elapsed_ms = inner.elapsed_ms.max(elapsed_ms);
    }
}

impl Timers for ManualTimers {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let mut inner = self.inner.lock().unwrap();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let deadline = inner.elapsed_ms.saturating_add(delay_ms);
        inner.pending.push((deadline, id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.inner
            .lock()
            .unwrap()
            .pending
            .retain(|(_, pending)| *pending != id);
    }
}

impl ISys for ManualTimers {
    fn get_timestamp_millis(&self) -> i64 {
        let inner = self.inner.lock().unwrap();
        inner.epoch_millis + inner.elapsed_ms as i64
    }
}

/// Timers backed by the tokio clock. Fired timers are delivered through the
/// widget event queue so that they are serialized with user interactions.
pub struct TokioTimers {
    events: UnboundedSender<SchedulerEvent>,
    next_id: u64,
    pending: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioTimers {
    pub(crate) fn new(events: UnboundedSender<SchedulerEvent>) -> Self {
        Self {
            events,
            next_id: 0,
            pending: HashMap::new(),
        }
    }
}

impl Timers for TokioTimers {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.pending.retain(|_, task| !task.is_finished());

        let id = TimerId(self.next_id);
        self.next_id += 1;
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the widget has been torn down
            let _ = events.send(SchedulerEvent::TimerFired(id));
        });
        self.pending.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.pending.remove(&id) {
            task.abort();
        }
    }
}
