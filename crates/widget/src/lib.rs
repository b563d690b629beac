mod config;
mod error;
mod feed;
mod presentation;
mod reporter;
mod runtime;
mod scheduler;
mod timer;
mod widget;

pub use config::WidgetConfig;
pub use error::{ConfigurationError, FetchError};
pub use feed::{Feed, FeedClient, HttpFeedClient};
pub use presentation::{
    Container, ElementHandle, InteractionTarget, MarkupAdapter, PresentationAdapter,
    RenderedNotification,
};
pub use reporter::{EventReporter, HttpEventReporter, InMemoryEventReporter};
pub use runtime::{WidgetHandle, WidgetRuntime};
pub use scheduler::{DisplayScheduler, Phase, RotationState, SchedulerEvent, EXIT_ANIMATION};
pub use timer::{ManualTimers, TimerId, Timers, TokioTimers};
pub use widget::{init_widget, WidgetContext};
