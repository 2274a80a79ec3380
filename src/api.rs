use gloo::console::{error, log};
use gloo_net::http::Request;
use urlencoding::encode;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{ApiMessage, Catalog};

/// The three backend calls the page makes.
pub trait ActivityApi {
    async fn list_activities(&self) -> Result<Catalog, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError>;
}

pub fn activities_url(base: &str) -> String {
    format!("{base}/activities")
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!("{base}/activities/{}/signup?email={}", encode(activity), encode(email))
}

pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!("{base}/activities/{}/unregister?email={}", encode(activity), encode(email))
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(config: &AppConfig) -> Self {
        Self { base: config.api_base.clone() }
    }
}

impl ActivityApi for HttpApi {
    async fn list_activities(&self) -> Result<Catalog, ApiError> {
        let result = fetch_catalog(&activities_url(&self.base)).await;
        match &result {
            Ok(catalog) => log!(format!("Loaded {} activities", catalog.len())),
            Err(e) => error!(format!("Error fetching activities: {e}")),
        }
        result
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
        let result = post_signup(&signup_url(&self.base, activity, email)).await;
        if let Err(e @ (ApiError::Network(_) | ApiError::Parse(_))) = &result {
            error!(format!("Error signing up: {e}"));
        }
        result
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
        let result = delete_participant(&unregister_url(&self.base, activity, email)).await;
        if let Err(e @ ApiError::Network(_)) = &result {
            error!(format!("Error unregistering participant: {e}"));
        }
        result
    }
}

async fn fetch_catalog(url: &str) -> Result<Catalog, ApiError> {
    let resp = Request::get(url).send().await.map_err(ApiError::network)?;
    let body = resp.text().await.map_err(ApiError::parse)?;
    classify_catalog(resp.ok(), resp.status(), &body)
}

async fn post_signup(url: &str) -> Result<ApiMessage, ApiError> {
    let resp = Request::post(url).send().await.map_err(ApiError::network)?;
    let body = resp.text().await.map_err(ApiError::parse)?;
    classify_message(resp.ok(), resp.status(), &body, false)
}

async fn delete_participant(url: &str) -> Result<ApiMessage, ApiError> {
    let resp = Request::delete(url).send().await.map_err(ApiError::network)?;
    let body = resp.text().await.unwrap_or_default();
    classify_message(resp.ok(), resp.status(), &body, true)
}

/// Any non-2xx catalog response is a load failure, whatever the body says.
pub fn classify_catalog(ok: bool, status: u16, body: &str) -> Result<Catalog, ApiError> {
    if !ok {
        let detail = serde_json::from_str::<ApiMessage>(body).ok().and_then(|m| m.detail);
        return Err(ApiError::Server { status, detail });
    }
    serde_json::from_str(body).map_err(ApiError::parse)
}

/// Maps a signup/unregister response to its outcome. With `tolerate_bad_body`
/// an unparseable body reads as `{}` instead of failing.
pub fn classify_message(
    ok: bool,
    status: u16,
    body: &str,
    tolerate_bad_body: bool,
) -> Result<ApiMessage, ApiError> {
    let message = match serde_json::from_str::<ApiMessage>(body) {
        Ok(m) => m,
        Err(_) if tolerate_bad_body => ApiMessage::default(),
        Err(e) => return Err(ApiError::parse(e)),
    };
    if ok {
        Ok(message)
    } else {
        Err(ApiError::Server { status, detail: message.detail })
    }
}
