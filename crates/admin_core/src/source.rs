//! One-shot retrieval of the member list.

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::Member;
use tracing::{error, info};

use crate::error::FetchError;

pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[async_trait]
pub trait MemberSource: Send + Sync {
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError>;
}

/// Reads the member list with a single unauthenticated GET.
#[derive(Debug, Clone)]
pub struct HttpMemberSource {
    http: Client,
    endpoint: String,
}

impl HttpMemberSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpMemberSource {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBERS_URL)
    }
}

#[async_trait]
impl MemberSource for HttpMemberSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError> {
        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        let members: Vec<Member> = serde_json::from_slice(&body)?;
        Ok(members)
    }
}

/// Resolves the source exactly once. Failures are logged and produce an empty
/// list; there is no retry.
pub async fn load_members(source: &dyn MemberSource) -> Vec<Member> {
    match source.fetch_members().await {
        Ok(members) => {
            info!(count = members.len(), "members: loaded");
            members
        }
        Err(err) => {
            error!(error = %err, "members: fetch failed, starting with an empty table");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
