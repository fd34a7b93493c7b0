//! HTTP implementation of the task gateway.
//!
//! Speaks the conventional todos REST protocol:
//! `GET /todos?userId={owner}`, `POST /todos`, `PATCH /todos/{id}`,
//! `DELETE /todos/{id}`, with JSON bodies of `{title, userId, completed}`.

use super::{GatewayError, TaskDraft, TaskGateway};
use crate::libs::task::Task;
use reqwest::{Client, Response};

pub struct RestGateway {
    client: Client,
    base_url: String,
}

impl RestGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn check(res: Response) -> Result<Response, GatewayError> {
        if res.status().is_success() {
            Ok(res)
        } else {
            Err(GatewayError::Status(res.status()))
        }
    }
}

impl TaskGateway for RestGateway {
    async fn list(&self, owner: i64) -> Result<Vec<Task>, GatewayError> {
        let url = format!("{}?userId={}", self.todos_url(), owner);
        tracing::debug!(%url, "listing tasks");
        let res = self.client.get(url).send().await?;
        Ok(Self::check(res)?.json().await?)
    }

    async fn create(&self, draft: &TaskDraft) -> Result<Task, GatewayError> {
        tracing::debug!(title = %draft.title, "creating task");
        let res = self.client.post(self.todos_url()).json(draft).send().await?;
        Ok(Self::check(res)?.json().await?)
    }

    async fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task, GatewayError> {
        tracing::debug!(id, "updating task");
        let res = self.client.patch(format!("{}/{}", self.todos_url(), id)).json(draft).send().await?;
        Ok(Self::check(res)?.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        tracing::debug!(id, "deleting task");
        let res = self.client.delete(format!("{}/{}", self.todos_url(), id)).send().await?;
        Self::check(res)?;
        Ok(())
    }
}
