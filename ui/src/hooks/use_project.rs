use jiff::Timestamp;
use payloads::responses::Project;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::fetch::{Sourced, load_project};
use crate::state::CacheKey;
use crate::{State, get_api_client};

/// Hook return type for a single project
pub struct ProjectHookReturn {
    pub project: Option<Sourced<Project>>,
    pub is_loading: bool,
    /// Set only when the remote fetch failed and no bundled entry matched
    /// by id, slug, or numeric id. Pages render a not-found state from it.
    pub error: Option<String>,
    #[allow(dead_code)]
    pub refetch: Callback<()>,
}

/// Hook for a single project by id (or slug, or numeric id via the bundled
/// dataset when the remote fetch fails).
#[hook]
pub fn use_project(id: String) -> ProjectHookReturn {
    let (state, dispatch) = use_store::<State>();
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let refetch = {
        let dispatch = dispatch.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        use_callback(id.clone(), move |id: String, _| {
            let dispatch = dispatch.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let mut seq = 0;
                dispatch.reduce_mut(|state| {
                    seq = state.begin_fetch(CacheKey::Project(id.clone()));
                });

                let api_client = get_api_client();
                match load_project(&api_client, &id).await {
                    Ok(value) => {
                        dispatch.reduce_mut(|state| {
                            state.commit_project(
                                id,
                                seq,
                                value,
                                Timestamp::now(),
                            );
                        });
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        let state = state.clone();
        let is_loading = is_loading.clone();

        use_effect_with(id.clone(), move |id| {
            if !state.project_is_fresh(id, Timestamp::now()) && !*is_loading {
                refetch.emit(id.clone());
            }
        });
    }

    let project = state.get_project(&id).map(|entry| entry.value.clone());
    let current_error = (*error).clone();
    let effective_is_loading =
        *is_loading || (project.is_none() && current_error.is_none());

    ProjectHookReturn {
        project,
        is_loading: effective_is_loading,
        error: current_error,
        refetch: Callback::from(move |_| refetch.emit(id.clone())),
    }
}
