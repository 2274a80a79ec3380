use web_sys::window;

const API_BASE_META: &str = "meta[name=\"activities-api-base\"]";

pub const SIGNUP_NOTICE_MS: u32 = 5_000;
pub const UNREGISTER_NOTICE_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    pub signup_notice_ms: u32,
    pub unregister_notice_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            signup_notice_ms: SIGNUP_NOTICE_MS,
            unregister_notice_ms: UNREGISTER_NOTICE_MS,
        }
    }
}

impl AppConfig {
    pub fn with_api_base(base: Option<&str>) -> Self {
        let api_base = base
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        Self { api_base, ..Self::default() }
    }

    /// Reads `<meta name="activities-api-base" content="...">` from the page.
    pub fn from_dom() -> Self {
        Self::with_api_base(read_api_base_meta().as_deref())
    }
}

fn read_api_base_meta() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.query_selector(API_BASE_META).ok()??;
    el.get_attribute("content")
}
