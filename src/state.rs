use std::rc::Rc;

use yew::Reducible;

use crate::models::Catalog;
use crate::view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "message success",
            NoticeKind::Error => "message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
    /// `None` keeps the notice up until something replaces it.
    pub dismiss_after_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Loading,
    Loaded(Catalog),
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub panel: Panel,
    /// Selector option values. Only a successful load replaces them.
    pub options: Vec<String>,
    pub form: SignupForm,
    pub notice: Option<Notice>,
    applied_refresh: u64,
    next_notice_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            panel: Panel::Loading,
            options: Vec::new(),
            form: SignupForm::default(),
            notice: None,
            applied_refresh: 0,
            next_notice_id: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CatalogLoaded { seq: u64, catalog: Catalog },
    CatalogFailed { seq: u64 },
    Notify { kind: NoticeKind, text: String, dismiss_after_ms: Option<u32> },
    DismissNotice(u64),
    EditEmail(String),
    SelectActivity(String),
    ResetForm,
}

impl AppState {
    /// Refresh results older than the newest one applied are dropped.
    fn accepts_refresh(&self, seq: u64) -> bool {
        seq >= self.applied_refresh
    }
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Action::CatalogLoaded { seq, catalog } => {
                if !self.accepts_refresh(seq) {
                    return self;
                }
                next.applied_refresh = seq;
                next.options = view::selector_options(&catalog);
                next.form.activity.clear();
                next.panel = Panel::Loaded(catalog);
            }
            Action::CatalogFailed { seq } => {
                if !self.accepts_refresh(seq) {
                    return self;
                }
                next.applied_refresh = seq;
                next.panel = Panel::Failed;
            }
            Action::Notify { kind, text, dismiss_after_ms } => {
                next.notice = Some(Notice { id: next.next_notice_id, kind, text, dismiss_after_ms });
                next.next_notice_id += 1;
            }
            Action::DismissNotice(id) => {
                if self.notice.as_ref().map(|n| n.id) != Some(id) {
                    return self;
                }
                next.notice = None;
            }
            Action::EditEmail(email) => next.form.email = email,
            Action::SelectActivity(activity) => next.form.activity = activity,
            Action::ResetForm => next.form = SignupForm::default(),
        }
        Rc::new(next)
    }
}
