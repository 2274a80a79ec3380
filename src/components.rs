use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::state::{Notice, Panel, SignupForm};
use crate::view::{
    activity_cards, unregister_label, ActivityCardView, Roster, LOADING_TEXT, LOAD_FAILED_TEXT,
    NO_PARTICIPANTS_TEXT, SELECT_PLACEHOLDER,
};

/// (activity name, participant email)
pub type UnregisterCallback = Callback<(String, String)>;

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub panel: Panel,
    pub on_unregister: UnregisterCallback,
}

#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    let body = match &props.panel {
        Panel::Loading => html! { <p>{ LOADING_TEXT }</p> },
        Panel::Failed => html! { <p>{ LOAD_FAILED_TEXT }</p> },
        Panel::Loaded(catalog) => html! {
            <>
              { for activity_cards(catalog).into_iter().map(|card| {
                  let key = card.name.clone();
                  html! {
                    <ActivityCard
                        key={key}
                        card={card}
                        on_unregister={props.on_unregister.clone()}
                    />
                  }
              }) }
            </>
        },
    };

    html! { <div id="activities-list">{ body }</div> }
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub card: ActivityCardView,
    pub on_unregister: UnregisterCallback,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let card = &props.card;

    let roster = match &card.roster {
        Roster::Empty => html! { <p class="no-participants">{ NO_PARTICIPANTS_TEXT }</p> },
        Roster::Participants(emails) => html! {
            <ul>
              { for emails.iter().map(|email| {
                  let onclick = {
                      let on_unregister = props.on_unregister.clone();
                      let target = (card.name.clone(), email.clone());
                      Callback::from(move |_: MouseEvent| on_unregister.emit(target.clone()))
                  };
                  html! {
                    <li class="participant-item">
                      <span class="participant-email">{ email.clone() }</span>
                      <button
                          type="button"
                          class="delete-participant"
                          title="Unregister participant"
                          aria-label={unregister_label(email)}
                          {onclick}
                      >
                        { "✖" }
                      </button>
                    </li>
                  }
              }) }
            </ul>
        },
    };

    html! {
      <div class="activity-card">
        <h4>{ card.name.clone() }</h4>
        <p>{ card.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
        <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability()) }</p>

        <div class="participants-section">
          <h5>{ "Participants" }</h5>
          <div class="participants-list">{ roster }</div>
        </div>
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub form: SignupForm,
    pub options: Vec<String>,
    pub on_email: Callback<String>,
    pub on_activity: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignupFormView)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let select_ref = use_node_ref();

    // <select> has no controlled `value` in Yew, so push the state into the element.
    {
        let select_ref = select_ref.clone();
        use_effect_with(
            (props.form.activity.clone(), props.options.clone()),
            move |(activity, _)| {
                if let Some(sel) = select_ref.cast::<HtmlSelectElement>() {
                    sel.set_value(activity);
                }
                || ()
            },
        );
    }

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let oninput = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };

    let onchange = {
        let on_activity = props.on_activity.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            on_activity.emit(sel.value());
        })
    };

    html! {
      <form id="signup-form" {onsubmit}>
        <div class="form-group">
          <label for="email">{ "Student Email:" }</label>
          <input
              type="email"
              id="email"
              required=true
              placeholder="your-email@mergington.edu"
              value={props.form.email.clone()}
              {oninput}
          />
        </div>
        <div class="form-group">
          <label for="activity">{ "Select Activity:" }</label>
          <select id="activity" required=true ref={select_ref} {onchange}>
            <option value="" disabled=true>{ SELECT_PLACEHOLDER }</option>
            { for props.options.iter().map(|name| html! {
                <option value={name.clone()}>{ name.clone() }</option>
            }) }
          </select>
        </div>
        <button type="submit">{ "Sign Up" }</button>
      </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    match &props.notice {
        Some(n) => html! { <div id="message" class={n.kind.class()}>{ n.text.clone() }</div> },
        None => html! { <div id="message" class="hidden"></div> },
    }
}
