use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::auth::Credentials;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_login: Callback<Credentials>,
    /// Failure from the last login attempt
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            username.set(target.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            password.set(target.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let local_error = local_error.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if username.is_empty() || password.is_empty() {
                local_error.set(Some("Please enter a username and password".to_string()));
                return;
            }
            local_error.set(None);
            on_login.emit(Credentials {
                username: (*username).clone(),
                password: (*password).clone(),
            });
        })
    };

    let banner = (*local_error).clone().or_else(|| props.error.clone());

    html! {
        <div class="login-screen">
            <div class="panel login-form">
                <h1>{"Smart Irrigation System"}</h1>
                <h2>{"Sign in"}</h2>

                if let Some(message) = banner {
                    <div class="banner error"><p>{message}</p></div>
                }

                <form {onsubmit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            id="username"
                            type="text"
                            value={(*username).clone()}
                            oninput={on_username_input}
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                        />
                    </div>
                    <button type="submit" class="submit-button">{"Sign In"}</button>
                </form>
            </div>
        </div>
    }
}
