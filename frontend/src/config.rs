pub const AUTOPLAY_DELAY_MS: u32 = 6_000;
pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 900;

#[cfg(debug_assertions)]
pub fn get_contact_endpoint() -> Option<&'static str> {
    non_empty(option_env!("CONTACT_ENDPOINT_DEV"))  // e.g. http://localhost:3001/api/contact
}

#[cfg(not(debug_assertions))]
pub fn get_contact_endpoint() -> Option<&'static str> {
    non_empty(option_env!("CONTACT_ENDPOINT"))
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Tunables shared by the page components.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub autoplay_delay_ms: u32,
    pub header_scroll_threshold: f64,
    pub submit_delay_ms: u32,
    /// Where the contact form posts to. `None` simulates a successful send.
    pub contact_endpoint: Option<&'static str>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: AUTOPLAY_DELAY_MS,
            header_scroll_threshold: HEADER_SCROLL_THRESHOLD,
            submit_delay_ms: SIMULATED_SUBMIT_DELAY_MS,
            contact_endpoint: None,
        }
    }
}

impl SiteConfig {
    pub fn current() -> Self {
        Self {
            contact_endpoint: get_contact_endpoint(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behaviour() {
        let config = SiteConfig::default();
        assert_eq!(config.autoplay_delay_ms, 6_000);
        assert_eq!(config.header_scroll_threshold, 20.0);
        assert_eq!(config.submit_delay_ms, 900);
        assert!(config.contact_endpoint.is_none());
    }

    #[test]
    fn endpoint_follows_build_profile() {
        #[cfg(debug_assertions)]
        let expected = non_empty(option_env!("CONTACT_ENDPOINT_DEV"));
        #[cfg(not(debug_assertions))]
        let expected = non_empty(option_env!("CONTACT_ENDPOINT"));
        assert_eq!(get_contact_endpoint(), expected);
        assert_eq!(SiteConfig::current().contact_endpoint, expected);
    }

    #[test]
    fn blank_endpoint_counts_as_unset() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("https://api.example.com/contact")), Some("https://api.example.com/contact"));
    }
}
