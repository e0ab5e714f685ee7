use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::core::contests::{Contest, JudgeClient, JudgeError, Judgement, Problem, Submission};

/// DomJudge REST API client. Only judgements are fetched with credentials.
pub struct DomJudgeClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl DomJudgeClient {
    pub fn new(
        base_url: &str,
        username: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Self, JudgeError> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert(
            "User-Agent",
            HeaderValue::from_static("DomJudgeDiscordBot/0.1"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| JudgeError::Fetch(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    fn contest_url(&self, contest_id: &str, resource: &str) -> String {
        format!("{}/contests/{}/{}", self.base_url, contest_id, resource)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<Vec<T>, JudgeError> {
        let resp = request
            .send()
            .await
            .map_err(|e| JudgeError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(JudgeError::Fetch(format!(
                "DomJudge returned {} for {}",
                status, what
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| JudgeError::Fetch(e.to_string()))?;
        decode(&body, what)
    }
}

fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<Vec<T>, JudgeError> {
    serde_json::from_str(body).map_err(|e| JudgeError::Decode(format!("{}: {}", what, e)))
}

#[async_trait]
impl JudgeClient for DomJudgeClient {
    async fn list_contests(&self) -> Result<Vec<Contest>, JudgeError> {
        let url = format!("{}/contests", self.base_url);
        self.fetch(self.client.get(url), "contests").await
    }

    async fn list_problems(&self, contest_id: &str) -> Result<Vec<Problem>, JudgeError> {
        let request = self
            .client
            .get(self.contest_url(contest_id, "problems"))
            .query(&[("strict", "false")]);
        self.fetch(request, "problems").await
    }

    async fn list_submissions(&self, contest_id: &str) -> Result<Vec<Submission>, JudgeError> {
        let request = self
            .client
            .get(self.contest_url(contest_id, "submissions"))
            .query(&[("strict", "false")]);
        self.fetch(request, "submissions").await
    }

    async fn list_judgements(&self, contest_id: &str) -> Result<Vec<Judgement>, JudgeError> {
        let request = self
            .client
            .get(self.contest_url(contest_id, "judgements"))
            .query(&[("strict", "false")])
            .basic_auth(&self.username, Some(&self.password));
        self.fetch(request, "judgements").await
    }
}
