use crate::clock::Clock;
use crate::model::Post;
use crate::twitter::{ApiError, TwitterClient};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// Largest page the user timeline endpoint will return
pub const PAGE_SIZE: u32 = 200;
/// Never wait less than this after being rate limited
pub const MIN_WAIT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ReaperError {
    #[error("Unable to fetch timeline: {0}")]
    Fetch(#[source] ApiError),
    #[error("Unable to delete tweet {id}: {source}")]
    Delete {
        id: u64,
        #[source]
        source: ApiError,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct ReapOptions {
    /// Tweets at least this many days old are deleted
    pub days: u32,
    /// Report candidates without deleting them
    pub dry_run: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Every tweet looked at, spared ones included
    pub examined: usize,
    pub skipped: usize,
    /// Tweets old enough to be deleted
    pub candidates: usize,
    pub deleted: usize,
}

pub struct Reaper<'a> {
    twitter: &'a dyn TwitterClient,
    clock: &'a dyn Clock,
    spare: HashSet<&'a str>,
    options: ReapOptions,
}

impl<'a> Reaper<'a> {
    pub fn new(
        twitter: &'a dyn TwitterClient,
        clock: &'a dyn Clock,
        spare: &'a [String],
        options: ReapOptions,
    ) -> Self {
        Self {
            twitter,
            clock,
            spare: spare.iter().map(String::as_str).collect(),
            options,
        }
    }

    /// Walk the timeline from newest to oldest until it runs out, deleting old tweets on the way
    pub async fn run(&self) -> Result<RunSummary, ReaperError> {
        let owner = match self.twitter.verify_credentials().await {
            Ok(account) => {
                log::info!("Authenticated as @{} ({})", account.screen_name, account.id);
                Some(account.screen_name)
            }
            Err(e) => {
                log::warn!("Unable to verify credentials: {}", e);
                None
            }
        };

        let mut summary = RunSummary::default();
        let mut max_id = None;
        loop {
            let page = self.fetch_page(owner.as_deref(), max_id).await?;
            if page.is_empty() {
                break;
            }
            log::debug!("Got {} tweets", page.len());
            for post in page {
                max_id = Some(post.id.saturating_sub(1));
                summary.examined += 1;
                self.process(&post, &mut summary).await?;
            }
        }
        Ok(summary)
    }

    async fn fetch_page(
        &self,
        owner: Option<&str>,
        max_id: Option<u64>,
    ) -> Result<Vec<Post>, ReaperError> {
        loop {
            match self.twitter.user_timeline(owner, max_id, PAGE_SIZE).await {
                Ok(page) => return Ok(page),
                Err(ApiError::RateLimited { reset }) => {
                    let wait = rate_limit_wait(reset, self.clock.now());
                    log::info!("Rate limited. Reset at {}. Waiting for {:?}", reset, wait);
                    self.clock.sleep(wait).await;
                }
                Err(e @ ApiError::Parse(_)) => {
                    // Nothing usable came back, so this reads as the end of the timeline
                    log::warn!("Problem parsing response: {}", e);
                    return Ok(Vec::new());
                }
                Err(e) => return Err(ReaperError::Fetch(e)),
            }
        }
    }

    async fn process(&self, post: &Post, summary: &mut RunSummary) -> Result<(), ReaperError> {
        let id = post.id_str();
        log::debug!(
            "Examining {} by @{}",
            id,
            post.screen_name.as_deref().unwrap_or("unknown")
        );
        if self.spare.contains(id.as_str()) {
            log::info!("Skipping: {}", id);
            summary.skipped += 1;
            return Ok(());
        }

        let days = post.age_days(self.clock.now());
        if days < i64::from(self.options.days) {
            return Ok(());
        }
        log::info!(
            "Tweet: {}\tCreated at: {}\tDays since creation: {}",
            id,
            post.created_at,
            days
        );
        summary.candidates += 1;
        if self.options.dry_run {
            return Ok(());
        }
        self.twitter
            .delete_tweet(post.id)
            .await
            .map_err(|source| ReaperError::Delete {
                id: post.id,
                source,
            })?;
        log::info!("Deleted: {}", id);
        summary.deleted += 1;
        Ok(())
    }
}

/// One second past the reset time, but at least [`MIN_WAIT`]
pub fn rate_limit_wait(reset: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    let until_reset = (reset - now + chrono::Duration::seconds(1))
        .to_std()
        .unwrap_or(Duration::ZERO);
    until_reset.max(MIN_WAIT)
}
