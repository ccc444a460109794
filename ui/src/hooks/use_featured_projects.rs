use jiff::Timestamp;
use payloads::responses::Project;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::fetch::{Sourced, load_featured_projects};
use crate::state::CacheKey;
use crate::{State, get_api_client};

/// Hook return type for the featured project rail
pub struct FeaturedProjectsHookReturn {
    pub projects: Option<Sourced<Vec<Project>>>,
    pub is_loading: bool,
    #[allow(dead_code)]
    pub refetch: Callback<()>,
}

/// Hook for the featured project listing. Shares the cache-and-fallback
/// behavior of `use_projects` under its own cache key.
#[hook]
pub fn use_featured_projects() -> FeaturedProjectsHookReturn {
    let (state, dispatch) = use_store::<State>();
    let is_loading = use_state(|| false);

    let refetch = {
        let dispatch = dispatch.clone();
        let is_loading = is_loading.clone();

        use_callback((), move |_, _| {
            let dispatch = dispatch.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let mut seq = 0;
                dispatch.reduce_mut(|state| {
                    seq = state.begin_fetch(CacheKey::FeaturedProjects);
                });

                let api_client = get_api_client();
                let value = load_featured_projects(&api_client).await;
                dispatch.reduce_mut(|state| {
                    state.commit_featured_projects(
                        seq,
                        value,
                        Timestamp::now(),
                    );
                });

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        let state = state.clone();
        let is_loading = is_loading.clone();

        use_effect_with((), move |_| {
            if !state.featured_projects_are_fresh(Timestamp::now())
                && !*is_loading
            {
                refetch.emit(());
            }
        });
    }

    let projects = state
        .get_featured_projects()
        .map(|entry| entry.value.clone());
    let effective_is_loading = *is_loading || projects.is_none();

    FeaturedProjectsHookReturn {
        projects,
        is_loading: effective_is_loading,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
