use crate::{
    presentation::{ElementHandle, InteractionTarget, PresentationAdapter},
    reporter::EventReporter,
    timer::{ManualTimers, TimerId, Timers},
};
use popify_domain::{AccessKey, DisplayConfig, EventKind, NotificationRecord};
use popify_utils::ISys;
use std::{sync::Arc, time::Duration};
use tracing::{debug, error, warn};

/// Length of the exit animation. The element is unmounted once it is over.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    WaitingInitial,
    Showing,
    Hiding,
    WaitingNext,
}

/// Everything that can move the `DisplayScheduler` forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// The feed has been loaded
    Start,
    TimerFired(TimerId),
    /// The user closed the notification
    Dismiss(ElementHandle),
    /// A qualifying click on the notification body
    Click(ElementHandle),
    /// Raw pointer interaction, routed through the `PresentationAdapter`
    Interaction(ElementHandle, InteractionTarget),
}

#[derive(Debug)]
pub struct RotationState {
    queue: Vec<NotificationRecord>,
    cursor: usize,
    phase: Phase,
    active_element: Option<ElementHandle>,
    pending_timer: Option<TimerId>,
    click_reported: bool,
}

impl RotationState {
    fn new(queue: Vec<NotificationRecord>) -> Self {
        Self {
            queue,
            cursor: 0,
            phase: Phase::Idle,
            active_element: None,
            pending_timer: None,
            click_reported: false,
        }
    }

    pub fn queue(&self) -> &[NotificationRecord] {
        &self.queue
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_element(&self) -> Option<ElementHandle> {
        self.active_element
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_timer
    }
}

/// The rotation state machine of one widget instance.
///
/// ```text
/// Idle -> WaitingInitial -> Showing -> Hiding -> WaitingNext -> Showing -> ...
/// ```
///
/// The scheduler never sleeps. It arms one timer per phase through `Timers`
/// and reacts to the resulting `SchedulerEvent::TimerFired` in `advance`.
/// Only the most recently armed timer is honored, so stale firings are
/// harmless. At most one element is mounted at any time.
pub struct DisplayScheduler<A, T> {
    key: AccessKey,
    config: DisplayConfig,
    state: RotationState,
    adapter: A,
    timers: T,
    reporter: Arc<dyn EventReporter>,
    sys: Arc<dyn ISys>,
}

impl<A: PresentationAdapter, T: Timers> DisplayScheduler<A, T> {
    pub fn new(
        key: AccessKey,
        config: DisplayConfig,
        mut queue: Vec<NotificationRecord>,
        adapter: A,
        timers: T,
        reporter: Arc<dyn EventReporter>,
        sys: Arc<dyn ISys>,
    ) -> Self {
        queue.truncate(config.max_queue_size);
        Self {
            key,
            config,
            state: RotationState::new(queue),
            adapter,
            timers,
            reporter,
            sys,
        }
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Single entry point of the state machine. Returns the phase after the event.
    pub fn advance(&mut self, event: SchedulerEvent) -> Phase {
        match event {
            SchedulerEvent::Start => self.start(),
            SchedulerEvent::TimerFired(id) => self.on_timer(id),
            SchedulerEvent::Dismiss(handle) => self.on_dismiss(handle),
            SchedulerEvent::Click(handle) => self.on_click(handle),
            SchedulerEvent::Interaction(handle, target) => {
                if let Some(event) = self.adapter.interact(handle, target) {
                    self.advance(event);
                }
            }
        }
        self.state.phase
    }

    fn start(&mut self) {
        if self.state.phase != Phase::Idle {
            warn!("Rotation already started, ignoring start");
            return;
        }
        if self.state.queue.is_empty() {
            debug!("No notifications to show, staying idle");
            return;
        }
        self.state.phase = Phase::WaitingInitial;
        self.arm(self.config.inter_notification_delay());
    }

    fn on_timer(&mut self, id: TimerId) {
        if self.state.pending_timer != Some(id) {
            debug!("Ignoring stale timer {:?}", id);
            return;
        }
        self.state.pending_timer = None;

        match self.state.phase {
            Phase::WaitingInitial | Phase::WaitingNext => self.show_current(),
            Phase::Showing => self.begin_hide(),
            Phase::Hiding => self.finish_hide(),
            Phase::Idle => {}
        }
    }

    fn on_dismiss(&mut self, handle: ElementHandle) {
        if self.state.phase != Phase::Showing || self.state.active_element != Some(handle) {
            debug!("Ignoring dismiss of {:?} in phase {:?}", handle, self.state.phase);
            return;
        }
        if let Some(id) = self.state.pending_timer.take() {
            self.timers.cancel(id);
        }
        self.begin_hide();
    }

    fn on_click(&mut self, handle: ElementHandle) {
        let mounted = matches!(self.state.phase, Phase::Showing | Phase::Hiding)
            && self.state.active_element == Some(handle);
        if !mounted || self.state.click_reported {
            return;
        }
        self.state.click_reported = true;
        self.reporter.report(&self.key, EventKind::Click);
    }

    fn show_current(&mut self) {
        if let Some(active) = self.state.active_element {
            error!(
                "Refusing to mount while {:?} is still on screen in phase {:?}",
                active, self.state.phase
            );
            return;
        }

        let record = &self.state.queue[self.state.cursor];
        let handle = self.adapter.mount(record, self.sys.now());
        self.state.active_element = Some(handle);
        self.state.click_reported = false;
        self.state.phase = Phase::Showing;
        self.reporter.report(&self.key, EventKind::Impression);
        self.arm(self.config.visible_duration());
    }

    fn begin_hide(&mut self) {
        let handle = match self.state.active_element {
            Some(handle) => handle,
            None => {
                error!("Nothing mounted to hide in phase {:?}", self.state.phase);
                return;
            }
        };
        self.adapter.begin_exit(handle);
        self.state.phase = Phase::Hiding;
        self.arm(EXIT_ANIMATION);
    }

    fn finish_hide(&mut self) {
        match self.state.active_element.take() {
            Some(handle) => self.adapter.unmount(handle),
            None => error!("Nothing mounted to unmount"),
        }
        self.state.cursor = (self.state.cursor + 1) % self.state.queue.len();
        self.state.phase = Phase::WaitingNext;
        self.arm(self.config.inter_notification_delay());
    }

    fn arm(&mut self, delay: Duration) {
        self.state.pending_timer = Some(self.timers.schedule(delay));
    }
}

impl<A: PresentationAdapter> DisplayScheduler<A, ManualTimers> {
    /// Fires, in deadline order, every timer due up to `elapsed_ms` on the
    /// logical clock, including timers armed while doing so.
    pub fn run_until(&mut self, elapsed_ms: u64) {
        while let Some(id) = self.timers.fire_next_due(elapsed_ms) {
            self.advance(SchedulerEvent::TimerFired(id));
        }
        self.timers.set_elapsed(elapsed_ms);
    }
}
