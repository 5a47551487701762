//! HTTP implementation of [`TaskService`]
//!
//! Maps the CRUD contract onto the tracker's REST endpoints:
//! `GET/POST {base}/api/tasks`, `PATCH/DELETE {base}/api/tasks/{id}`.
//! Completion toggling is a `PATCH` carrying only `completed`.

use reqwest::Response;
use url::Url;

use taskdeck_core::prelude::*;
use taskdeck_core::{Task, TaskId};

use crate::protocol::{CreateTaskRequest, TaskPatch};
use crate::service::TaskService;

/// Cap on error-body text kept for diagnostics
const ERROR_BODY_MAX: usize = 200;

/// `TaskService` over the tracker's REST API.
///
/// Cheap to clone: the underlying `reqwest::Client` is an `Arc` internally,
/// so clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTaskClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpTaskClient {
    /// Build a client for the given server base URL (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|_| Error::invalid_server_url(base_url))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::invalid_server_url(base_url.as_str()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// `{base}/api/tasks`
    fn collection_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "tasks"]);
        }
        url
    }

    /// `{base}/api/tasks/{id}` -- the id goes through path-segment escaping
    /// since it is an opaque string
    fn task_url(&self, id: &TaskId) -> Url {
        let mut url = self.collection_url();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id.as_str());
        }
        url
    }

    /// Map a non-success response into an `ApiStatus` error, keeping a
    /// truncated body for diagnostics.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let mut body = response.text().await.unwrap_or_default();
        if body.len() > ERROR_BODY_MAX {
            let mut end = ERROR_BODY_MAX;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            body.truncate(end);
        }
        Err(Error::api_status(status.as_u16(), body))
    }
}

impl TaskService for HttpTaskClient {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.collection_url();
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;
        Self::check(response)
            .await?
            .json::<Vec<Task>>()
            .await
            .map_err(|e| Error::api(e.to_string()))
    }

    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task> {
        let url = self.collection_url();
        debug!("POST {url}");
        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;
        Self::check(response)
            .await?
            .json::<Task>()
            .await
            .map_err(|e| Error::api(e.to_string()))
    }

    async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> Result<Task> {
        let url = self.task_url(id);
        debug!("PATCH {url}");
        let response = self
            .http
            .patch(url)
            .json(&patch)
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;
        Self::check(response)
            .await?
            .json::<Task>()
            .await
            .map_err(|e| Error::api(e.to_string()))
    }

    async fn delete_task(&self, id: &TaskId) -> Result<()> {
        let url = self.task_url(id);
        debug!("DELETE {url}");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn toggle_task(&self, id: &TaskId, completed: bool) -> Result<Task> {
        self.update_task(id, TaskPatch::completion(completed)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(HttpTaskClient::new("not a url").is_err());
        assert!(HttpTaskClient::new("ftp://tasks.example").is_err());
    }

    #[test]
    fn test_collection_url() {
        let client = HttpTaskClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.collection_url().as_str(),
            "http://localhost:3000/api/tasks"
        );
    }

    #[test]
    fn test_task_url_escapes_opaque_ids() {
        let client = HttpTaskClient::new("http://localhost:3000").unwrap();
        let url = client.task_url(&TaskId::from("a b/c"));
        assert_eq!(url.as_str(), "http://localhost:3000/api/tasks/a%20b%2Fc");
    }
}
