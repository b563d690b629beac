use crate::{
    presentation::{ElementHandle, InteractionTarget, PresentationAdapter},
    scheduler::{DisplayScheduler, Phase, SchedulerEvent},
    timer::TokioTimers,
};
use tokio::sync::{
    mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    watch,
};
use tracing::{debug, info};

/// Event loop of a live widget.
///
/// Timer expirations and user interactions all go through one channel and
/// are applied to the scheduler one at a time, in arrival order. After every
/// event the mounted element, if any, is published to the `WidgetHandle`s.
pub struct WidgetRuntime {
    events: UnboundedSender<SchedulerEvent>,
    receiver: UnboundedReceiver<SchedulerEvent>,
    active: watch::Sender<Option<ElementHandle>>,
}

impl WidgetRuntime {
    pub fn new() -> Self {
        let (events, receiver) = unbounded_channel();
        let (active, _) = watch::channel(None);
        Self {
            events,
            receiver,
            active,
        }
    }

    /// Timers delivering into this runtime. Hand these to `init_widget`.
    pub fn timers(&self) -> TokioTimers {
        TokioTimers::new(self.events.clone())
    }

    pub fn handle(&self) -> WidgetHandle {
        WidgetHandle {
            events: self.events.clone(),
            active: self.active.subscribe(),
        }
    }

    /// Drives `scheduler` for the rest of the widget's life. The scheduler's
    /// own timers keep the event channel open, so this only returns for a
    /// scheduler that never started.
    pub async fn run<A: PresentationAdapter>(
        self,
        mut scheduler: DisplayScheduler<A, TokioTimers>,
    ) -> DisplayScheduler<A, TokioTimers> {
        if scheduler.phase() == Phase::Idle {
            info!("Popify: Nothing to show");
            return scheduler;
        }

        let Self {
            events,
            mut receiver,
            active,
        } = self;
        drop(events);

        publish_active(&active, &scheduler);
        while let Some(event) = receiver.recv().await {
            let phase = scheduler.advance(event);
            debug!("Widget event {:?} -> {:?}", event, phase);
            publish_active(&active, &scheduler);
        }
        scheduler
    }
}

fn publish_active<A: PresentationAdapter>(
    active: &watch::Sender<Option<ElementHandle>>,
    scheduler: &DisplayScheduler<A, TokioTimers>,
) {
    let mounted = scheduler.state().active_element();
    active.send_if_modified(|current| {
        let changed = *current != mounted;
        *current = mounted;
        changed
    });
}

impl Default for WidgetRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Lets the host see the mounted element and feed user interactions with it
/// into a running widget
#[derive(Clone)]
pub struct WidgetHandle {
    events: UnboundedSender<SchedulerEvent>,
    active: watch::Receiver<Option<ElementHandle>>,
}

impl WidgetHandle {
    /// The element currently on screen, including during its exit animation
    pub fn active_element(&self) -> Option<ElementHandle> {
        *self.active.borrow()
    }

    /// Waits until a different element, or none, is on screen. Returns
    /// `None` once the widget has stopped.
    pub async fn changed(&mut self) -> Option<Option<ElementHandle>> {
        self.active.changed().await.ok()?;
        Some(*self.active.borrow_and_update())
    }

    pub fn interact(&self, element: ElementHandle, target: InteractionTarget) {
        self.send(SchedulerEvent::Interaction(element, target));
    }

    /// Clicks the body of the element on screen, if any
    pub fn click_active(&self) {
        if let Some(element) = self.active_element() {
            self.interact(element, InteractionTarget::Body);
        }
    }

    /// Dismisses the element on screen, if any
    pub fn dismiss_active(&self) {
        if let Some(element) = self.active_element() {
            self.interact(element, InteractionTarget::DismissControl);
        }
    }

    fn send(&self, event: SchedulerEvent) {
        if self.events.send(event).is_err() {
            debug!("Widget is no longer running, dropping {:?}", event);
        }
    }
}
