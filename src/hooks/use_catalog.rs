use std::rc::Rc;
use yew::prelude::*;

use crate::models::catalog::Catalog;
use crate::services::api::fetch_catalog;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum CatalogState {
    Loading,
    Loaded(Rc<Catalog>),
    Error(String),
}

impl CatalogState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the catalog if it is loaded
    pub fn data(&self) -> Option<&Rc<Catalog>> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }
}

/// Loads the crop/soil option lists once on mount.
#[hook]
pub fn use_catalog() -> UseStateHandle<CatalogState> {
    let state = use_state(|| CatalogState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_catalog().await {
                    Ok(catalog) => state.set(CatalogState::Loaded(Rc::new(catalog))),
                    Err(e) => state.set(CatalogState::Error(e.user_message())),
                }
            });

            || ()
        });
    }

    state
}
