use std::rc::Rc;
use yew::prelude::*;

use crate::models::decision::{DecisionRequest, DecisionResponse};
use crate::services::api::submit_decision;
use wasm_bindgen_futures::spawn_local;

/// Rendered submission state. Unlike the fetch hooks this is not an
/// enum: a failed submission must keep the previously displayed decision
/// while carrying its own error banner.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DecisionView {
    pub decision: Option<Rc<DecisionResponse>>,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Handle returned by `use_decision` hook
#[derive(Clone, PartialEq)]
pub struct DecisionHandle {
    pub view: DecisionView,
    pub submit: Callback<DecisionRequest>,
}

/// Submits decision requests and tracks the latest response.
///
/// `on_decided` fires exactly once per successful submission, after the
/// new decision is stored; the dashboard uses it to refetch history so
/// the log stays consistent with the just-created record.
#[hook]
pub fn use_decision(on_decided: Callback<()>) -> DecisionHandle {
    let view = use_state(DecisionView::default);

    let submit = {
        let view = view.clone();

        Callback::from(move |request: DecisionRequest| {
            let view = view.clone();
            let on_decided = on_decided.clone();

            view.set(DecisionView {
                decision: (*view).decision.clone(),
                error: None,
                submitting: true,
            });

            spawn_local(async move {
                match submit_decision(&request).await {
                    Ok(response) => {
                        view.set(DecisionView {
                            decision: Some(Rc::new(response)),
                            error: None,
                            submitting: false,
                        });
                        on_decided.emit(());
                    }
                    Err(e) => {
                        view.set(DecisionView {
                            decision: (*view).decision.clone(),
                            error: Some(e.user_message()),
                            submitting: false,
                        });
                    }
                }
            });
        })
    };

    DecisionHandle {
        view: (*view).clone(),
        submit,
    }
}
