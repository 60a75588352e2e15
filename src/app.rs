use yew::prelude::*;

use crate::components::{
    DecisionDisplay, ErrorBanner, HistoryChart, HistoryTable, InputForm, LoginForm, Spinner,
};
use crate::hooks::use_auth::{AuthState, use_auth};
use crate::hooks::use_catalog::{CatalogState, use_catalog};
use crate::hooks::use_decision::use_decision;
use crate::hooks::use_history::{HistoryState, use_history};
use crate::services::api::export_csv_url;

#[function_component(App)]
pub fn app() -> Html {
    let auth = use_auth();

    let body = match &auth.state {
        AuthState::Checking => html! { <Spinner label="Loading..." /> },
        AuthState::Anonymous => html! {
            <LoginForm on_login={auth.login.clone()} error={auth.error.clone()} />
        },
        AuthState::Authenticated(user) => html! {
            <Dashboard username={user.username.clone()} on_logout={auth.logout.clone()} />
        },
    };

    html! {
        <div class="app-container">
            { body }

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DashboardProps {
    username: String,
    on_logout: Callback<()>,
}

#[function_component(Dashboard)]
fn dashboard(props: &DashboardProps) -> Html {
    let catalog = use_catalog();
    let history = use_history();

    // Each successful submission triggers exactly one history refetch,
    // keeping the log consistent with the just-created record.
    let on_decided = {
        let refresh = history.refresh.clone();
        Callback::from(move |()| refresh.emit(()))
    };
    let decision = use_decision(on_decided);

    let on_logout = {
        let logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let on_export = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&export_csv_url(), "_blank");
        }
    });

    let (crops, soils) = match &*catalog {
        CatalogState::Loaded(catalog) => (catalog.crops.clone(), catalog.soils.clone()),
        _ => (Vec::new(), Vec::new()),
    };

    html! {
        <>
            <header class="app-header">
                <h1>{"Smart Irrigation System"}</h1>
                <div class="header-user">
                    <span>{format!("Welcome, {}", props.username)}</span>
                    <button class="logout-button" onclick={on_logout}>{"Logout"}</button>
                </div>
            </header>

            <main class="app-main">
                if let CatalogState::Error(message) = &*catalog {
                    <ErrorBanner message={message.clone()} />
                }

                <div class="dashboard-grid">
                    <section class="form-section">
                        <InputForm
                            {crops}
                            {soils}
                            busy={decision.view.submitting}
                            submit_error={decision.view.error.clone()}
                            on_submit={decision.submit.clone()}
                        />
                    </section>

                    <section class="decision-section">
                        <DecisionDisplay data={decision.view.decision.clone()} />
                    </section>
                </div>

                <section class="panel history-section">
                    <div class="history-header">
                        <h2>{"Irrigation History"}</h2>
                        <button class="export-button" onclick={on_export}>{"Export CSV"}</button>
                    </div>

                    {
                        match &history.state {
                            HistoryState::Loading => html! { <Spinner label="Loading history..." /> },
                            HistoryState::Error(message) => html! { <ErrorBanner message={message.clone()} /> },
                            HistoryState::Loaded(entries) => html! {
                                <>
                                    <HistoryChart history={entries.clone()} />
                                    <HistoryTable history={entries.clone()} />
                                </>
                            },
                        }
                    }
                </section>
            </main>

            <footer class="app-footer">
                <p>{"Smart Irrigation System"}</p>
            </footer>
        </>
    }
}
