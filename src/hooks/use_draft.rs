use gloo_storage::Storage;
use yew::prelude::*;

use crate::models::decision::DecisionDraft;

const STORAGE_KEY: &str = "irrigation-form";

/// Custom hook for the decision form draft with localStorage persistence
#[hook]
pub fn use_draft() -> UseStateHandle<DecisionDraft> {
    // Seed from the last session's inputs, fallback to an empty draft
    let draft = use_state(|| load_draft().unwrap_or_default());

    // Effect: Persist draft to localStorage on change
    {
        let draft_value = (*draft).clone();
        use_effect_with(draft_value, move |draft| {
            save_draft(draft);
            || ()
        });
    }

    draft
}

/// Load the saved draft from localStorage
fn load_draft() -> Option<DecisionDraft> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

/// Save the draft to localStorage
fn save_draft(draft: &DecisionDraft) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, draft) {
        web_sys::console::warn_1(&format!("Failed to save form draft: {e:?}").into());
    }
}
