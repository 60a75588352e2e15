use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_else(|| "Loading...".to_string())]
    pub label: String,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{&props.label}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Scoped error banner. A failed call sets a flag for its own section;
/// nothing here ever takes down the rest of the view.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="banner error">
            <p>{&props.message}</p>
        </div>
    }
}
