//! Global cache store for fetched data. Entries are written only by the
//! hooks layer; pages read them via the hook return types. Freshness checks
//! take the current time as a parameter so tests can drive the clock.

use std::collections::HashMap;

use jiff::Timestamp;
use payloads::requests::{BlogListParams, ProjectListParams};
use payloads::responses::{BlogPost, Project};
use yewdux::prelude::*;

use crate::fetch::Sourced;

/// How long a cache entry is served before the next access triggers a
/// background refetch.
pub const STALENESS_WINDOW_SECS: i64 = 5 * 60;

/// Identifies one cached fetch for sequence tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    ProjectList(ProjectListParams),
    FeaturedProjects,
    Project(String),
    BlogList(BlogListParams),
    BlogPost(String),
}

/// A cached value plus the bookkeeping for staleness checks and
/// last-issued-wins conflict resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub fetched_at: Timestamp,
    pub seq: u64,
}

impl<T> CacheEntry<T> {
    pub fn is_fresh(&self, now: Timestamp) -> bool {
        now.as_second() - self.fetched_at.as_second() < STALENESS_WINDOW_SECS
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    project_lists:
        HashMap<ProjectListParams, CacheEntry<Sourced<Vec<Project>>>>,
    featured_projects: Option<CacheEntry<Sourced<Vec<Project>>>>,
    individual_projects: HashMap<String, CacheEntry<Sourced<Project>>>,
    blog_lists: HashMap<BlogListParams, CacheEntry<Sourced<Vec<BlogPost>>>>,
    individual_posts: HashMap<String, CacheEntry<Sourced<BlogPost>>>,

    /// Latest sequence number handed out per key. A completed fetch is only
    /// committed when it still carries the latest number, so an older
    /// request settling late cannot clobber a newer result.
    issued_seqs: HashMap<CacheKey, u64>,
}

impl State {
    /// Register an outgoing fetch for `key` and return its sequence number.
    pub fn begin_fetch(&mut self, key: CacheKey) -> u64 {
        let seq = self.issued_seqs.entry(key).or_insert(0);
        *seq += 1;
        *seq
    }

    fn is_latest(&self, key: &CacheKey, seq: u64) -> bool {
        self.issued_seqs.get(key).copied() == Some(seq)
    }

    pub fn commit_project_list(
        &mut self,
        params: ProjectListParams,
        seq: u64,
        value: Sourced<Vec<Project>>,
        now: Timestamp,
    ) {
        if !self.is_latest(&CacheKey::ProjectList(params.clone()), seq) {
            tracing::debug!("discarding superseded project list response");
            return;
        }
        self.project_lists.insert(
            params,
            CacheEntry {
                value,
                fetched_at: now,
                seq,
            },
        );
    }

    pub fn get_project_list(
        &self,
        params: &ProjectListParams,
    ) -> Option<&CacheEntry<Sourced<Vec<Project>>>> {
        self.project_lists.get(params)
    }

    pub fn project_list_is_fresh(
        &self,
        params: &ProjectListParams,
        now: Timestamp,
    ) -> bool {
        self.get_project_list(params)
            .is_some_and(|entry| entry.is_fresh(now))
    }

    pub fn commit_featured_projects(
        &mut self,
        seq: u64,
        value: Sourced<Vec<Project>>,
        now: Timestamp,
    ) {
        if !self.is_latest(&CacheKey::FeaturedProjects, seq) {
            tracing::debug!("discarding superseded featured list response");
            return;
        }
        self.featured_projects = Some(CacheEntry {
            value,
            fetched_at: now,
            seq,
        });
    }

    pub fn get_featured_projects(
        &self,
    ) -> Option<&CacheEntry<Sourced<Vec<Project>>>> {
        self.featured_projects.as_ref()
    }

    pub fn featured_projects_are_fresh(&self, now: Timestamp) -> bool {
        self.featured_projects
            .as_ref()
            .is_some_and(|entry| entry.is_fresh(now))
    }

    pub fn commit_project(
        &mut self,
        id: String,
        seq: u64,
        value: Sourced<Project>,
        now: Timestamp,
    ) {
        if !self.is_latest(&CacheKey::Project(id.clone()), seq) {
            tracing::debug!(id, "discarding superseded project response");
            return;
        }
        self.individual_projects.insert(
            id,
            CacheEntry {
                value,
                fetched_at: now,
                seq,
            },
        );
    }

    pub fn get_project(
        &self,
        id: &str,
    ) -> Option<&CacheEntry<Sourced<Project>>> {
        self.individual_projects.get(id)
    }

    pub fn project_is_fresh(&self, id: &str, now: Timestamp) -> bool {
        self.get_project(id).is_some_and(|entry| entry.is_fresh(now))
    }

    pub fn commit_blog_list(
        &mut self,
        params: BlogListParams,
        seq: u64,
        value: Sourced<Vec<BlogPost>>,
        now: Timestamp,
    ) {
        if !self.is_latest(&CacheKey::BlogList(params.clone()), seq) {
            tracing::debug!("discarding superseded blog list response");
            return;
        }
        self.blog_lists.insert(
            params,
            CacheEntry {
                value,
                fetched_at: now,
                seq,
            },
        );
    }

    pub fn get_blog_list(
        &self,
        params: &BlogListParams,
    ) -> Option<&CacheEntry<Sourced<Vec<BlogPost>>>> {
        self.blog_lists.get(params)
    }

    pub fn blog_list_is_fresh(
        &self,
        params: &BlogListParams,
        now: Timestamp,
    ) -> bool {
        self.get_blog_list(params)
            .is_some_and(|entry| entry.is_fresh(now))
    }

    pub fn commit_blog_post(
        &mut self,
        id: String,
        seq: u64,
        value: Sourced<BlogPost>,
        now: Timestamp,
    ) {
        if !self.is_latest(&CacheKey::BlogPost(id.clone()), seq) {
            tracing::debug!(id, "discarding superseded blog post response");
            return;
        }
        self.individual_posts.insert(
            id,
            CacheEntry {
                value,
                fetched_at: now,
                seq,
            },
        );
    }

    pub fn get_blog_post(
        &self,
        id: &str,
    ) -> Option<&CacheEntry<Sourced<BlogPost>>> {
        self.individual_posts.get(id)
    }

    pub fn blog_post_is_fresh(&self, id: &str, now: Timestamp) -> bool {
        self.get_blog_post(id)
            .is_some_and(|entry| entry.is_fresh(now))
    }

    /// Drop every cached entry and all sequence counters.
    pub fn reset_caches(&mut self) {
        self.project_lists.clear();
        self.featured_projects = None;
        self.individual_projects.clear();
        self.blog_lists.clear();
        self.individual_posts.clear();
        self.issued_seqs.clear();
    }
}
