//! Thin synchronous client for the TickTick v2 web API
//!
//! Covers only what an export run needs: sign-on, the project listing, and
//! per-project task fetches. The client is created once at startup and
//! passed down explicitly; it holds the session token for its lifetime.

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::models::{Project, Task};
use reqwest::blocking::Client;
use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const USER_AGENT: &str = concat!("ticktick-export/", env!("CARGO_PKG_VERSION"));

/// Sign-on response payload; everything else in it is ignored
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignonResponse {
    token: String,
    inbox_id: String,
}

/// Authenticated TickTick API session
pub struct TickTickClient {
    http: Client,
    base_url: String,
    token: String,
    inbox_id: String,
}

impl TickTickClient {
    /// Sign on with username and password
    ///
    /// The Inbox is not a listed project; its id arrives with the sign-on
    /// payload and is captured here for [`inbox_tasks`](Self::inbox_tasks).
    ///
    /// # Errors
    /// Returns `ExportError::Authentication` when the service rejects the
    /// credentials, `ExportError::Http` on transport failures.
    pub fn login(config: &ExportConfig, username: &str, password: &str) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        let url = format!(
            "{}/api/v2/user/signon?wc=true&remember=true",
            config.base_url
        );
        let response = http
            .post(&url)
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::authentication(format!(
                "sign-on returned {status}"
            )));
        }

        let signon: SignonResponse = response.json()?;
        tracing::debug!(inbox_id = %signon.inbox_id, "signed on");

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            token: signon.token,
            inbox_id: signon.inbox_id,
        })
    }

    /// Project id of the authenticated user's Inbox
    #[must_use]
    pub fn inbox_id(&self) -> &str {
        &self.inbox_id
    }

    /// List projects owned by the authenticated user, open ones only
    ///
    /// # Errors
    /// Returns `ExportError::Api` on a non-success status.
    pub fn projects(&self) -> Result<Vec<Project>> {
        let projects: Vec<Project> = self.get_json("/api/v2/projects")?;
        Ok(projects
            .into_iter()
            .filter(Project::is_exportable)
            .collect())
    }

    /// Fetch the ordered task list of one project
    ///
    /// # Errors
    /// Returns `ExportError::Api` on a non-success status.
    pub fn project_tasks(&self, project_id: &str) -> Result<Vec<Task>> {
        self.get_json(&format!("/api/v2/project/{project_id}/tasks"))
    }

    /// Fetch the Inbox task list
    ///
    /// # Errors
    /// Returns `ExportError::Api` on a non-success status.
    pub fn inbox_tasks(&self) -> Result<Vec<Task>> {
        self.project_tasks(&self.inbox_id)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .header(header::COOKIE, format!("t={}", self.token))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::api(format!("GET {path} returned {status}")));
        }

        Ok(response.json()?)
    }
}
