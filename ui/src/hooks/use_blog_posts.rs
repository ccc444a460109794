use jiff::Timestamp;
use payloads::requests::BlogListParams;
use payloads::responses::BlogPost;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::fetch::{Sourced, load_blog_posts};
use crate::state::CacheKey;
use crate::{State, get_api_client};

/// Hook return type for blog list data
pub struct BlogPostsHookReturn {
    pub posts: Option<Sourced<Vec<BlogPost>>>,
    pub is_loading: bool,
    #[allow(dead_code)]
    pub refetch: Callback<()>,
}

/// Hook for the blog post listing. Never errors: with no bundled blog
/// content, a failed fetch resolves to the empty list.
#[hook]
pub fn use_blog_posts(params: BlogListParams) -> BlogPostsHookReturn {
    let (state, dispatch) = use_store::<State>();
    let is_loading = use_state(|| false);

    let refetch = {
        let dispatch = dispatch.clone();
        let is_loading = is_loading.clone();

        use_callback(params.clone(), move |params: BlogListParams, _| {
            let dispatch = dispatch.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let mut seq = 0;
                dispatch.reduce_mut(|state| {
                    seq =
                        state.begin_fetch(CacheKey::BlogList(params.clone()));
                });

                let api_client = get_api_client();
                let value = load_blog_posts(&api_client, &params).await;
                dispatch.reduce_mut(|state| {
                    state.commit_blog_list(
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

    {
        let refetch = refetch.clone();
        let state = state.clone();
        let is_loading = is_loading.clone();

        use_effect_with(params.clone(), move |params| {
            if !state.blog_list_is_fresh(params, Timestamp::now())
                && !*is_loading
            {
                refetch.emit(params.clone());
            }
        });
    }

    let posts = state
        .get_blog_list(&params)
        .map(|entry| entry.value.clone());
    let effective_is_loading = *is_loading || posts.is_none();

    BlogPostsHookReturn {
        posts,
        is_loading: effective_is_loading,
        refetch: Callback::from(move |_| refetch.emit(params.clone())),
    }
}
