use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use url::Url;

use crate::{
    api::{AdoptClient, DEFAULT_API_URL},
    http::HttpClient,
};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("adoptv3-cli/", env!("CARGO_PKG_VERSION"));

pub struct Config {
    pub api: AdoptClient,
}

impl Config {
    pub fn new(api_url: Option<String>) -> Result<Self> {
        let api_url = api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        let api_url =
            Url::parse(api_url).with_context(|| format!("Invalid API URL: {}", api_url))?;
        debug!("Using API URL {}", api_url);

        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let api = AdoptClient::from_http_client(HttpClient::new(client), api_url);

        Ok(Self { api })
    }
}
