//! Async handlers for page load, the signup form and the unregister buttons.
//!
//! Every outcome is reported through a sink of [`Action`]s; nothing here touches
//! the DOM, so the same handlers run against an in-memory API in tests.

use std::cell::Cell;

use crate::api::ActivityApi;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::{Action, NoticeKind};

const SIGNUP_FALLBACK: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const UNREGISTER_OK_FALLBACK: &str = "Participant unregistered";
const UNREGISTER_FALLBACK: &str = "Failed to unregister participant";
const UNREGISTER_FAILED: &str = "Failed to unregister participant. Try again.";

pub struct Controller<A> {
    api: A,
    signup_notice_ms: u32,
    unregister_notice_ms: u32,
    refresh_seq: Cell<u64>,
}

impl<A: ActivityApi> Controller<A> {
    pub fn new(api: A, config: &AppConfig) -> Self {
        Self {
            api,
            signup_notice_ms: config.signup_notice_ms,
            unregister_notice_ms: config.unregister_notice_ms,
            refresh_seq: Cell::new(0),
        }
    }

    fn next_refresh(&self) -> u64 {
        let seq = self.refresh_seq.get() + 1;
        self.refresh_seq.set(seq);
        seq
    }

    /// Reloads the catalog. The sequence number is taken before the request goes
    /// out so a slow older response cannot overwrite a newer one.
    pub async fn refresh(&self, sink: &impl Fn(Action)) {
        let seq = self.next_refresh();
        match self.api.list_activities().await {
            Ok(catalog) => sink(Action::CatalogLoaded { seq, catalog }),
            Err(_) => sink(Action::CatalogFailed { seq }),
        }
    }

    pub async fn submit_signup(&self, email: &str, activity: &str, sink: &impl Fn(Action)) {
        match self.api.signup(activity, email).await {
            Ok(body) => {
                sink(notify(
                    NoticeKind::Success,
                    body.message.unwrap_or_default(),
                    Some(self.signup_notice_ms),
                ));
                sink(Action::ResetForm);
                self.refresh(sink).await;
            }
            Err(e @ ApiError::Server { .. }) => sink(notify(
                NoticeKind::Error,
                e.detail().unwrap_or(SIGNUP_FALLBACK).to_string(),
                Some(self.signup_notice_ms),
            )),
            Err(_) => sink(notify(NoticeKind::Error, SIGNUP_FAILED.to_string(), None)),
        }
    }

    pub async fn unregister(&self, activity: &str, email: &str, sink: &impl Fn(Action)) {
        match self.api.unregister(activity, email).await {
            Ok(body) => {
                sink(notify(
                    NoticeKind::Success,
                    body.message.unwrap_or_else(|| UNREGISTER_OK_FALLBACK.to_string()),
                    Some(self.unregister_notice_ms),
                ));
                self.refresh(sink).await;
            }
            Err(e @ ApiError::Server { .. }) => sink(notify(
                NoticeKind::Error,
                e.detail().unwrap_or(UNREGISTER_FALLBACK).to_string(),
                None,
            )),
            Err(_) => sink(notify(NoticeKind::Error, UNREGISTER_FAILED.to_string(), None)),
        }
    }
}

fn notify(kind: NoticeKind, text: String, dismiss_after_ms: Option<u32>) -> Action {
    Action::Notify { kind, text, dismiss_after_ms }
}
