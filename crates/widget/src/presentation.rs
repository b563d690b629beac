use crate::scheduler::SchedulerEvent;
use chrono::{DateTime, Utc};
use popify_domain::{time_ago, DisplayConfig, Locale, NotificationRecord, Position, Theme, ID};
use tracing::{info, warn};

const BADGE_URL: &str = "https://popify.vercel.app";

/// Opaque reference to a rendered notification. Only the adapter that
/// issued it knows what it points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(u64);

/// The part of a rendered notification the user interacted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionTarget {
    Body,
    DismissControl,
    AttributionBadge,
}

/// Owns the notification container and every element rendered into it.
///
/// `unmount` with a handle that is not mounted (already unmounted, or never
/// issued by this adapter) is a no-op that logs a warning.
pub trait PresentationAdapter {
    /// Applies the final display config. Called once, before the first mount.
    fn configure(&mut self, config: &DisplayConfig);
    /// Renders `record` into the container and starts its entrance animation
    fn mount(&mut self, record: &NotificationRecord, now: DateTime<Utc>) -> ElementHandle;
    /// Drops the shown state so the exit animation plays. The element stays
    /// in the container until `unmount`.
    fn begin_exit(&mut self, handle: ElementHandle);
    fn unmount(&mut self, handle: ElementHandle);
    /// Translates a pointer interaction into the event the scheduler should
    /// see, if any. A body interaction yields `Click` only for the first
    /// interaction with a given element.
    fn interact(
        &mut self,
        handle: ElementHandle,
        target: InteractionTarget,
    ) -> Option<SchedulerEvent>;
}

#[derive(Debug, Clone)]
pub struct RenderedNotification {
    pub handle: ElementHandle,
    pub record_id: ID,
    /// `None` when avatars are disabled
    pub avatar: Option<String>,
    pub subject: String,
    pub location_clause: Option<String>,
    pub action: String,
    pub object: String,
    pub time_label: String,
    /// Whether the element carries the shown state
    pub shown: bool,
    clicked: bool,
}

impl RenderedNotification {
    /// Plain text as read by a screen reader
    pub fn text(&self) -> String {
        format!(
            "{}{} {} {} · {}",
            self.subject,
            self.location_clause.as_deref().unwrap_or(""),
            self.action,
            self.object,
            self.time_label
        )
    }

    pub fn markup(&self) -> String {
        let class = if self.shown {
            "popify-notification show"
        } else {
            "popify-notification"
        };
        let avatar = self
            .avatar
            .as_ref()
            .map(|a| format!(r#"<div class="popify-avatar">{}</div>"#, escape(a)))
            .unwrap_or_default();
        format!(
            concat!(
                r#"<div class="{class}">{avatar}<div class="popify-content">"#,
                r#"<p class="popify-text"><strong>{subject}</strong>{location}<br>"#,
                r#"{action} <span class="highlight">{object}</span></p>"#,
                r#"<p class="popify-time">{time}</p></div>"#,
                r#"<button class="popify-close">✕</button>"#,
                r#"<a href="{badge}" target="_blank" class="popify-badge">✨ Popify</a></div>"#
            ),
            class = class,
            avatar = avatar,
            subject = escape(&self.subject),
            location = escape(self.location_clause.as_deref().unwrap_or("")),
            action = escape(&self.action),
            object = escape(&self.object),
            time = escape(&self.time_label),
            badge = BADGE_URL,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Container {
    pub position: Position,
    pub theme: Theme,
    pub show_avatar: bool,
    pub elements: Vec<RenderedNotification>,
}

impl Container {
    pub fn class_name(&self) -> String {
        format!("popify-container {} {}", self.position, self.theme.as_str())
    }
}

/// Renders notifications as HTML fragments inside an in-memory container
pub struct MarkupAdapter {
    locale: Locale,
    container: Container,
    next_handle: u64,
}

impl MarkupAdapter {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            container: Container {
                show_avatar: true,
                ..Default::default()
            },
            next_handle: 0,
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn element(&self, handle: ElementHandle) -> Option<&RenderedNotification> {
        self.container.elements.iter().find(|e| e.handle == handle)
    }

    fn element_mut(&mut self, handle: ElementHandle) -> Option<&mut RenderedNotification> {
        self.container
            .elements
            .iter_mut()
            .find(|e| e.handle == handle)
    }
}

impl PresentationAdapter for MarkupAdapter {
    fn configure(&mut self, config: &DisplayConfig) {
        self.container.position = config.position;
        self.container.theme = config.theme;
        self.container.show_avatar = config.show_avatar;
    }

    fn mount(&mut self, record: &NotificationRecord, now: DateTime<Utc>) -> ElementHandle {
        let handle = ElementHandle(self.next_handle);
        self.next_handle += 1;

        let element = RenderedNotification {
            handle,
            record_id: record.id.clone(),
            avatar: if self.container.show_avatar {
                Some(record.avatar_initial())
            } else {
                None
            },
            subject: record.subject_name().to_string(),
            location_clause: record
                .subject_location
                .as_deref()
                .map(|l| self.locale.location_clause(l)),
            action: record.action_verb.clone(),
            object: record.action_object.clone(),
            time_label: time_ago(record.occurred_at, now, self.locale),
            shown: true,
            clicked: false,
        };
        info!("Showing notification: {}", element.text());
        self.container.elements.push(element);
        handle
    }

    fn begin_exit(&mut self, handle: ElementHandle) {
        match self.element_mut(handle) {
            Some(element) => element.shown = false,
            None => warn!("begin_exit called with unknown handle {:?}", handle),
        }
    }

    fn unmount(&mut self, handle: ElementHandle) {
        let before = self.container.elements.len();
        self.container.elements.retain(|e| e.handle != handle);
        if self.container.elements.len() == before {
            warn!("unmount called with unknown handle {:?}", handle);
        }
    }

    fn interact(
        &mut self,
        handle: ElementHandle,
        target: InteractionTarget,
    ) -> Option<SchedulerEvent> {
        let element = self.element_mut(handle)?;
        match target {
            InteractionTarget::Body if !element.clicked => {
                element.clicked = true;
                Some(SchedulerEvent::Click(handle))
            }
            InteractionTarget::Body => None,
            InteractionTarget::DismissControl => Some(SchedulerEvent::Dismiss(handle)),
            InteractionTarget::AttributionBadge => None,
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap()
    }

    fn record(name: &str, location: Option<&str>) -> NotificationRecord {
        NotificationRecord::new(
            ID::new(),
            name.into(),
            location.map(String::from),
            "purchased".into(),
            "Pro plan".into(),
            now() - Duration::seconds(90),
        )
        .unwrap()
    }

    #[test]
    fn mounts_rendered_notification() {
        let mut adapter = MarkupAdapter::new(Locale::En);
        let handle = adapter.mount(&record("maria", Some("Lisbon")), now());

        let element = adapter.element(handle).unwrap();
        assert!(element.shown);
        assert_eq!(element.avatar.as_deref(), Some("M"));
        assert_eq!(element.time_label, "1 min ago");
        assert_eq!(element.text(), "maria from Lisbon purchased Pro plan · 1 min ago");
        assert!(element.markup().contains(r#"class="popify-notification show""#));
        assert_eq!(adapter.container().elements.len(), 1);
    }

    #[test]
    fn escapes_record_text() {
        let mut adapter = MarkupAdapter::new(Locale::En);
        let handle = adapter.mount(&record("<script>", None), now());
        let markup = adapter.element(handle).unwrap().markup();
        assert!(markup.contains("&lt;script&gt;"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn configure_applies_position_theme_and_avatar() {
        let mut adapter = MarkupAdapter::new(Locale::PtBr);
        adapter.configure(&DisplayConfig {
            position: Position::TopRight,
            theme: Theme::Dark,
            show_avatar: false,
            ..Default::default()
        });
        assert_eq!(adapter.container().class_name(), "popify-container top-right dark");

        let handle = adapter.mount(&record("João", Some("Recife")), now());
        let element = adapter.element(handle).unwrap();
        assert!(element.avatar.is_none());
        assert_eq!(element.location_clause.as_deref(), Some(" de Recife"));
        assert_eq!(element.time_label, "há 1 min");
        assert!(!element.markup().contains("popify-avatar"));
    }

    #[test]
    fn exit_then_unmount_removes_element() {
        let mut adapter = MarkupAdapter::new(Locale::En);
        let handle = adapter.mount(&record("Ana", None), now());

        adapter.begin_exit(handle);
        let element = adapter.element(handle).unwrap();
        assert!(!element.shown);
        assert!(element.markup().contains(r#"class="popify-notification""#));

        adapter.unmount(handle);
        assert!(adapter.element(handle).is_none());
        // Stale handles are ignored
        adapter.unmount(handle);
        assert!(adapter.container().elements.is_empty());
    }

    #[test]
    fn body_click_is_reported_once_per_mount() {
        let mut adapter = MarkupAdapter::new(Locale::En);
        let handle = adapter.mount(&record("Ana", None), now());

        assert_eq!(
            adapter.interact(handle, InteractionTarget::Body),
            Some(SchedulerEvent::Click(handle))
        );
        assert_eq!(adapter.interact(handle, InteractionTarget::Body), None);

        let next = adapter.mount(&record("Rui", None), now());
        assert_eq!(
            adapter.interact(next, InteractionTarget::Body),
            Some(SchedulerEvent::Click(next))
        );
    }

    #[test]
    fn dismiss_and_badge_are_not_clicks() {
        let mut adapter = MarkupAdapter::new(Locale::En);
        let handle = adapter.mount(&record("Ana", None), now());

        assert_eq!(
            adapter.interact(handle, InteractionTarget::AttributionBadge),
            None
        );
        assert_eq!(
            adapter.interact(handle, InteractionTarget::DismissControl),
            Some(SchedulerEvent::Dismiss(handle))
        );
        // The body click is still available after a badge interaction
        assert_eq!(
            adapter.interact(handle, InteractionTarget::Body),
            Some(SchedulerEvent::Click(handle))
        );
    }

    #[test]
    fn interactions_with_unknown_elements_are_ignored() {
        let mut adapter = MarkupAdapter::new(Locale::En);
        let handle = adapter.mount(&record("Ana", None), now());
        adapter.unmount(handle);
        assert_eq!(adapter.interact(handle, InteractionTarget::Body), None);
        assert_eq!(
            adapter.interact(handle, InteractionTarget::DismissControl),
            None
        );
    }
}
