use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    /// Handle of the account that owns the post, when the API included it
    pub screen_name: Option<String>,
}

impl Post {
    pub fn id_str(&self) -> String {
        self.id.to_string()
    }

    /// Whole days elapsed since the post was created, rounded down
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_hours() / 24
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: u64,
    pub screen_name: String,
}
