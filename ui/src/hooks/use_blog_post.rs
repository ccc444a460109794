use jiff::Timestamp;
use payloads::responses::BlogPost;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::fetch::{Sourced, load_blog_post};
use crate::state::CacheKey;
use crate::{State, get_api_client};

/// Hook return type for a single blog post
pub struct BlogPostHookReturn {
    pub post: Option<Sourced<BlogPost>>,
    pub is_loading: bool,
    /// Blog posts have no fallback; any fetch failure surfaces here.
    pub error: Option<String>,
    #[allow(dead_code)]
    pub refetch: Callback<()>,
}

/// Whether the hook should issue a fetch. An empty id means the route param
/// has not resolved yet; the hook stays disabled and issues nothing.
fn should_fetch(id: &str, cached_is_fresh: bool, in_flight: bool) -> bool {
    !id.is_empty() && !cached_is_fresh && !in_flight
}

/// Hook for a single blog post by id or slug. Disabled while `id` is empty
/// (e.g. a route param that has not resolved yet): no fetch is issued.
#[hook]
pub fn use_blog_post(id: String) -> BlogPostHookReturn {
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
                    seq = state.begin_fetch(CacheKey::BlogPost(id.clone()));
                });

                let api_client = get_api_client();
                match load_blog_post(&api_client, &id).await {
                    Ok(value) => {
                        dispatch.reduce_mut(|state| {
                            state.commit_blog_post(
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
            if should_fetch(
                id,
                state.blog_post_is_fresh(id, Timestamp::now()),
                *is_loading,
            ) {
                refetch.emit(id.clone());
            }
        });
    }

    let post = state.get_blog_post(&id).map(|entry| entry.value.clone());
    let current_error = (*error).clone();
    let effective_is_loading = *is_loading
        || (!id.is_empty() && post.is_none() && current_error.is_none());

    BlogPostHookReturn {
        post,
        is_loading: effective_is_loading,
        error: current_error,
        refetch: Callback::from(move |_| refetch.emit(id.clone())),
    }
}
