use popify_domain::Locale;
use tracing::warn;

const DEFAULT_API_URL: &str = "https://popify.vercel.app/api";

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Access key of the embedding. The widget will not start without it.
    pub access_key: Option<String>,
    /// Base url of the Popify api
    pub api_url: String,
    pub locale: Locale,
}

impl WidgetConfig {
    pub fn from_env() -> Self {
        let access_key = std::env::var("POPIFY_KEY").ok();
        let api_url = std::env::var("POPIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let locale = match std::env::var("POPIFY_LOCALE") {
            Ok(locale) => match locale.as_str() {
                "en" => Locale::En,
                "pt-BR" | "pt" => Locale::PtBr,
                _ => {
                    warn!(
                        "The given POPIFY_LOCALE: {} is not supported, falling back to en.",
                        locale
                    );
                    Locale::En
                }
            },
            Err(_) => Locale::En,
        };
        Self {
            access_key,
            api_url,
            locale,
        }
    }
}
