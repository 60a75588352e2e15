use std::rc::Rc;
use yew::prelude::*;

use crate::models::history::History;
use crate::services::api::fetch_history;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum HistoryState {
    Loading,
    Loaded(Rc<History>),
    Error(String),
}

impl HistoryState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the history if it is loaded
    pub fn data(&self) -> Option<&Rc<History>> {
        match self {
            Self::Loaded(history) => Some(history),
            _ => None,
        }
    }
}

/// Handle returned by `use_history` hook
#[derive(Clone, PartialEq)]
pub struct HistoryHandle {
    pub state: HistoryState,
    /// Requests a full reload; the in-memory list is always replaced
    /// wholesale, never merged.
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_history() -> HistoryHandle {
    let state = use_state(|| HistoryState::Loading);
    let trigger = use_state(|| 0u32); // Refetch trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            let state = state.clone();

            // Back to loading while the reload is in flight
            state.set(HistoryState::Loading);

            spawn_local(async move {
                match fetch_history().await {
                    Ok(history) => state.set(HistoryState::Loaded(Rc::new(history))),
                    Err(e) => state.set(HistoryState::Error(e.user_message())),
                }
            });

            || ()
        });
    }

    let refresh = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    HistoryHandle {
        state: (*state).clone(),
        refresh,
    }
}
