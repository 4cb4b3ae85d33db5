use reqwest::Response;
use serde::Serialize;

use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    /// A client for the endpoints at the root.
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/".to_string(),
        }
    }

    /// A client for the endpoints under the `/api/v1` prefix.
    pub fn with_v1_prefix(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/v1/".to_string(),
        }
    }

    pub async fn get_languages(&self) -> Response {
        self.get("languages", &[]).await
    }

    pub async fn get_docs_source(&self, params: &[(&str, &str)]) -> Response {
        self.get("docs-source", params).await
    }

    pub async fn post_docs_source<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("docs-source", form).await
    }

    pub async fn create_session<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("session", form).await
    }

    pub async fn get_session(&self, id: &str) -> Response {
        self.get(&format!("session/{id}"), &[]).await
    }

    pub async fn get_user_sessions(&self, user_id: &str) -> Response {
        self.get(&format!("sessions/{user_id}"), &[]).await
    }

    pub async fn reload_sources(&self) -> Response {
        self.post_empty("sources/reload").await
    }

    pub async fn health_check(&self) -> Response {
        self.get("health", &[]).await
    }

    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Response {
        self.with_api_key(reqwest::Client::new().get(self.base_url(path)).query(params))
            .send()
            .await
            .unwrap()
    }

    pub async fn post_empty(&self, path: &str) -> Response {
        self.with_api_key(reqwest::Client::new().post(self.base_url(path)))
            .send()
            .await
            .unwrap()
    }

    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        self.with_api_key(reqwest::Client::new().post(self.base_url(path)).json(form))
            .send()
            .await
            .unwrap()
    }

    /// A `POST` with a raw body, to send malformed json.
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Response {
        self.with_api_key(
            reqwest::Client::new()
                .post(self.base_url(path))
                .header("content-type", "application/json")
                .body(body),
        )
        .send()
        .await
        .unwrap()
    }

    fn with_api_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.connection_info.api_key {
            Some(api_key) => request.header("x-api-key", api_key),
            None => request,
        }
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

#[derive(Serialize, Debug)]
pub struct DocsSourceForm {
    pub language: Option<String>,
    pub topic: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CreateSessionForm {
    pub language: String,
    pub topic: Option<String>,
    pub user_id: Option<String>,
}
