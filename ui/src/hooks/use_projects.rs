use jiff::Timestamp;
use payloads::requests::ProjectListParams;
use payloads::responses::Project;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::fetch::{Sourced, load_projects};
use crate::state::CacheKey;
use crate::{State, get_api_client};

/// Hook return type for project list data
pub struct ProjectsHookReturn {
    pub projects: Option<Sourced<Vec<Project>>>,
    pub is_loading: bool,
    #[allow(dead_code)]
    pub refetch: Callback<()>,
}

impl ProjectsHookReturn {
    /// Returns true if this is the initial load (nothing cached yet)
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.projects.is_none()
    }
}

/// Hook for the project listing, cached per parameter set with
/// stale-while-revalidate semantics. List loads never error: on failure the
/// bundled dataset is served instead, tagged with its origin.
#[hook]
pub fn use_projects(params: ProjectListParams) -> ProjectsHookReturn {
    let (state, dispatch) = use_store::<State>();
    let is_loading = use_state(|| false);

    let refetch = {
        let dispatch = dispatch.clone();
        let is_loading = is_loading.clone();

        use_callback(params.clone(), move |params: ProjectListParams, _| {
            let dispatch = dispatch.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let mut seq = 0;
                dispatch.reduce_mut(|state| {
                    seq = state
                        .begin_fetch(CacheKey::ProjectList(params.clone()));
                });

                let api_client = get_api_client();
                let value = load_projects(&api_client, &params).await;
                dispatch.reduce_mut(|state| {
                    state.commit_project_list(
                        params,
                        seq,
                        value,
                        Timestamp::now(),
                    );
                });

                is_loading.set(false);
            });
        })
    };

    // Fetch on mount and whenever the cached entry has gone stale; the
    // stale value stays visible while the refetch runs.
    {
        let refetch = refetch.clone();
        let state = state.clone();
        let is_loading = is_loading.clone();

        use_effect_with(params.clone(), move |params| {
            if !state.project_list_is_fresh(params, Timestamp::now())
                && !*is_loading
            {
                refetch.emit(params.clone());
            }
        });
    }

    let projects = state
        .get_project_list(&params)
        .map(|entry| entry.value.clone());
    let effective_is_loading = *is_loading || projects.is_none();

    ProjectsHookReturn {
        projects,
        is_loading: effective_is_loading,
        refetch: Callback::from(move |_| refetch.emit(params.clone())),
    }
}
