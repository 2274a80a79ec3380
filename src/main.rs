// src/main.rs
mod api;
mod components;
mod config;
mod controller;
mod error;
mod models;
mod state;
mod view;

use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpApi;
use crate::components::{ActivityList, NoticeBanner, SignupFormView};
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::state::{Action, AppState};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_dom());
    let controller = {
        let config = config.clone();
        use_memo((), move |_| Controller::new(HttpApi::new(&config), &config))
    };
    let state = use_reducer(AppState::default);

    // Load the catalog once on mount
    {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let sink = move |a| dispatcher.dispatch(a);
                controller.refresh(&sink).await;
            });
            || ()
        });
    }

    // Auto-hide timed notices. A newer notice drops the old timer.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.notice.clone(), move |notice| {
            let timer = notice.as_ref().and_then(|n| {
                let id = n.id;
                n.dismiss_after_ms
                    .map(|ms| Timeout::new(ms, move || dispatcher.dispatch(Action::DismissNotice(id))))
            });
            move || drop(timer)
        });
    }

    let on_unregister = {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |(activity, email): (String, String)| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let sink = move |a| dispatcher.dispatch(a);
                controller.unregister(&activity, &email, &sink).await;
            });
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        let form = state.form.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let form = form.clone();
            spawn_local(async move {
                let sink = move |a| dispatcher.dispatch(a);
                controller.submit_signup(&form.email, &form.activity, &sink).await;
            });
        })
    };

    let on_email = {
        let dispatcher = state.dispatcher();
        Callback::from(move |v: String| dispatcher.dispatch(Action::EditEmail(v)))
    };

    let on_activity = {
        let dispatcher = state.dispatcher();
        Callback::from(move |v: String| dispatcher.dispatch(Action::SelectActivity(v)))
    };

    html! {
      <>
        <header>
          <h1>{ "Mergington High School" }</h1>
          <h2>{ "Extracurricular Activities" }</h2>
        </header>

        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <ActivityList panel={state.panel.clone()} {on_unregister} />
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <SignupFormView
                form={state.form.clone()}
                options={state.options.clone()}
                {on_email}
                {on_activity}
                {on_submit}
            />
            <NoticeBanner notice={state.notice.clone()} />
          </section>
        </main>
      </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
