use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Language used for the human readable parts of a rendered notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    PtBr,
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl Locale {
    /// Clause appended to the subject name when a location is known
    pub fn location_clause(&self, location: &str) -> String {
        match self {
            Self::En => format!(" from {}", location),
            Self::PtBr => format!(" de {}", location),
        }
    }
}

/// Formats the time elapsed between `occurred_at` and `now` as a short relative label.
///
/// Elapsed time is truncated to whole seconds and every bucket rounds down.
/// Timestamps in the future count as "now".
pub fn time_ago(occurred_at: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let seconds = (now - occurred_at).num_seconds();

    match locale {
        Locale::En => {
            if seconds < MINUTE {
                "now".into()
            } else if seconds < HOUR {
                format!("{} min ago", seconds / MINUTE)
            } else if seconds < DAY {
                format!("{} h ago", seconds / HOUR)
            } else {
                format!("{} d ago", seconds / DAY)
            }
        }
        Locale::PtBr => {
            if seconds < MINUTE {
                "agora".into()
            } else if seconds < HOUR {
                format!("há {} min", seconds / MINUTE)
            } else if seconds < DAY {
                format!("há {}h", seconds / HOUR)
            } else {
                format!("há {}d", seconds / DAY)
            }
        }
    }
}
