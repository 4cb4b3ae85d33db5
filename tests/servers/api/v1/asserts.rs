use docsrc::servers::apis::v1::context::docs_source::resources::DocsSource;
use docsrc::servers::apis::v1::context::session::resources::{Session, SessionCreated, SessionList};
use docsrc::servers::apis::v1::responses::ErrorDetail;
use reqwest::Response;

// Resource responses

pub async fn assert_docs_source(response: Response, expected_url: &str) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(
        response.json::<DocsSource>().await.unwrap(),
        DocsSource {
            url: expected_url.to_string()
        }
    );
}

pub async fn assert_session_created(response: Response) -> SessionCreated {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

    let created = response.json::<SessionCreated>().await.unwrap();

    assert_eq!(created.message, "session created");

    created
}

pub async fn assert_session(response: Response) -> Session {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<Session>().await.unwrap()
}

pub async fn assert_session_list(response: Response) -> SessionList {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<SessionList>().await.unwrap()
}

// OK response

pub async fn assert_ok(response: Response) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.text().await.unwrap(), "{\"status\":\"ok\"}");
}

// Error responses

pub async fn assert_error(response: Response, status: u16, detail: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(
        response.json::<ErrorDetail>().await.unwrap(),
        ErrorDetail {
            detail: detail.to_string()
        }
    );
}

/// The detail of some `400` responses comes from the request parser. Only the
/// status and the shape of the body are checked.
pub async fn assert_bad_request(response: Response) {
    assert_eq!(response.status(), 400);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert!(!response.json::<ErrorDetail>().await.unwrap().detail.is_empty());
}

pub async fn assert_not_found(response: Response) {
    assert_eq!(response.status(), 404);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert!(!response.json::<ErrorDetail>().await.unwrap().detail.is_empty());
}

pub async fn assert_missing_api_key(response: Response) {
    assert_error(response, 401, "missing api key").await;
}

pub async fn assert_invalid_api_key(response: Response) {
    assert_error(response, 401, "invalid api key").await;
}

pub async fn assert_failed_to_reload_sources(response: Response) {
    assert_error(response, 500, "failed to reload the language sources").await;
}
