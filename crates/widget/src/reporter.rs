use popify_domain::{AccessKey, EventKind};
use popify_sdk::PopifySDK;
use std::sync::Mutex;
use tracing::debug;

/// Best-effort sink for engagement events.
///
/// `report` returns immediately and has no failure mode visible to the
/// caller. Implementations deal with their own errors.
pub trait EventReporter: Send + Sync {
    fn report(&self, key: &AccessKey, kind: EventKind);
}

/// Sends events to the tracking endpoint on a detached task
pub struct HttpEventReporter {
    sdk: PopifySDK,
}

impl HttpEventReporter {
    pub fn new(sdk: PopifySDK) -> Self {
        Self { sdk }
    }
}

impl EventReporter for HttpEventReporter {
    fn report(&self, key: &AccessKey, kind: EventKind) {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                debug!("No async runtime available, dropping {} event", kind);
                return;
            }
        };

        let widget = self.sdk.widget.clone();
        let key = key.clone();
        runtime.spawn(async move {
            if let Err(e) = widget.track(key.as_str(), kind).await {
                debug!("Failed to report {} event: {:?}", kind, e);
            }
        });
    }
}

/// Keeps reported events in memory, mostly useful for tests and simulations
#[derive(Default)]
pub struct InMemoryEventReporter {
    reports: Mutex<Vec<(AccessKey, EventKind)>>,
}

impl InMemoryEventReporter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn reports(&self) -> Vec<(AccessKey, EventKind)> {
        self.reports.lock().unwrap().clone()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, reported)| *reported == kind)
            .count()
    }
}

impl EventReporter for InMemoryEventReporter {
    fn report(&self, key: &AccessKey, kind: EventKind) {
        self.reports.lock().unwrap().push((key.clone(), kind));
    }
}
