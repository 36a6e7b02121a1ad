use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// Credentials and the list of tweets that must never be deleted
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(rename = "APIKey")]
    pub api_key: String,
    #[serde(rename = "APISecretKey")]
    pub api_secret_key: String,
    #[serde(rename = "AccessToken")]
    pub access_token: String,
    #[serde(rename = "AccessTokenSecret")]
    pub access_token_secret: String,
    /// Tweet IDs to spare, in string form
    #[serde(rename = "Spare", default)]
    pub spare: Vec<String>,
}

impl Config {
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Unable to read config file: {}", path.display()))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        serde_json::from_str::<Config>(contents).context("Unable to deserialize config file")
    }
}
