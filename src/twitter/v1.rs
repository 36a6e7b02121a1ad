use crate::config::Config;
use crate::model::{Account, Post};
use crate::twitter::{ApiError, TwitterClient};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use egg_mode::user::{TwitterUser, UserID};
use egg_mode::{KeyPair, Token};

/// Twitter API v1.1 client, authenticated on behalf of a user with OAuth 1.0a
pub struct TwitterClientV1 {
    token: Token,
    /// Account ID embedded in the access token, used when no handle is known
    token_user_id: Option<u64>,
}

impl TwitterClientV1 {
    pub fn new(config: &Config) -> Self {
        let consumer = KeyPair::new(config.api_key.clone(), config.api_secret_key.clone());
        let access = KeyPair::new(
            config.access_token.clone(),
            config.access_token_secret.clone(),
        );
        Self {
            token: Token::Access { consumer, access },
            token_user_id: user_id_from_access_token(&config.access_token),
        }
    }

    fn timeline_owner(&self, owner: Option<&str>) -> Result<UserID, ApiError> {
        match (owner, self.token_user_id) {
            (Some(screen_name), _) => Ok(UserID::from(screen_name.to_string())),
            (None, Some(id)) => Ok(UserID::from(id)),
            (None, None) => Err(ApiError::Request(
                "No account to read the timeline of".to_string(),
            )),
        }
    }
}

#[async_trait]
impl TwitterClient for TwitterClientV1 {
    async fn verify_credentials(&self) -> Result<Account, ApiError> {
        let user = egg_mode::auth::verify_tokens(&self.token)
            .await
            .map_err(ApiError::from)?;
        Ok(Account::from(user.response))
    }

    async fn user_timeline(
        &self,
        owner: Option<&str>,
        max_id: Option<u64>,
        count: u32,
    ) -> Result<Vec<Post>, ApiError> {
        let owner = self.timeline_owner(owner)?;
        let timeline = egg_mode::tweet::user_timeline(owner, true, true, &self.token)
            .with_page_size(page_size(count)?);
        let tweets = timeline.call(None, max_id).await.map_err(ApiError::from)?;
        Ok(tweets.response.into_iter().map(Post::from).collect())
    }

    async fn delete_tweet(&self, id: u64) -> Result<(), ApiError> {
        egg_mode::tweet::delete(id, &self.token)
            .await
            .map_err(ApiError::from)?;
        Ok(())
    }
}

fn page_size(count: u32) -> Result<i32, ApiError> {
    i32::try_from(count).map_err(|_| ApiError::Request(format!("Invalid page size: {}", count)))
}

/// Access tokens issued by Twitter take the form `<user id>-<random>`
fn user_id_from_access_token(token: &str) -> Option<u64> {
    let (id, _) = token.split_once('-')?;
    id.parse().ok()
}

impl From<egg_mode::tweet::Tweet> for Post {
    fn from(tweet: egg_mode::tweet::Tweet) -> Self {
        Post {
            id: tweet.id,
            created_at: tweet.created_at,
            screen_name: tweet.user.map(|u| u.screen_name),
        }
    }
}

impl From<TwitterUser> for Account {
    fn from(user: TwitterUser) -> Self {
        Account {
            id: user.id,
            screen_name: user.screen_name,
        }
    }
}

impl From<egg_mode::error::Error> for ApiError {
    fn from(e: egg_mode::error::Error) -> Self {
        use egg_mode::error::Error;
        match e {
            Error::RateLimit(reset) => ApiError::RateLimited {
                // Fall back to "now" so a garbled reset still gets the minimum wait
                reset: Utc
                    .timestamp_opt(i64::from(reset), 0)
                    .single()
                    .unwrap_or_else(Utc::now),
            },
            // Twitter answered, just not with tweets (bad token, not found, over capacity)
            e @ Error::TwitterError(..)
            | e @ Error::BadStatus(_)
            | e @ Error::DeserializeError(_)
            | e @ Error::InvalidResponse(..)
            | e @ Error::MissingValue(_) => ApiError::Parse(e.to_string()),
            e => ApiError::Request(e.to_string()),
        }
    }
}
