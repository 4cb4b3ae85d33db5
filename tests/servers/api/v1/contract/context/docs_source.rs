use docsrc_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{assert_bad_request, assert_docs_source, assert_error, assert_not_found};
use crate::servers::api::v1::client::{Client, DocsSourceForm};
use crate::servers::api::Started;

#[tokio::test]
async fn should_resolve_the_default_documentation_of_a_language() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_docs_source(&[("language", "python")])
        .await;

    assert_docs_source(response, "https://docs.python.org/3/").await;

    env.stop().await;
}

#[tokio::test]
async fn should_resolve_the_documentation_of_a_language_topic() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_docs_source(&[("language", "python"), ("topic", "flask")])
        .await;

    assert_docs_source(response, "https://flask.palletsprojects.com/").await;

    env.stop().await;
}

#[tokio::test]
async fn should_ignore_the_case_of_the_language() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_docs_source(&[("language", "PyThOn")])
        .await;

    assert_docs_source(response, "https://docs.python.org/3/").await;

    env.stop().await;
}

#[tokio::test]
async fn should_fall_back_to_the_default_topic_for_unknown_topics() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_docs_source(
        client.get_docs_source(&[("language", "python"), ("topic", "numpy")]).await,
        "https://docs.python.org/3/",
    )
    .await;

    // Topics are case-sensitive
    assert_docs_source(
        client.get_docs_source(&[("language", "python"), ("topic", "Flask")]).await,
        "https://docs.python.org/3/",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_with_not_found_for_unknown_languages() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_docs_source(&[("language", "ruby")])
        .await;

    assert_error(response, 404, "Language not found: ruby").await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_with_bad_request_when_the_language_is_missing() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_error(client.get_docs_source(&[]).await, 400, "the language parameter is required").await;
    assert_error(
        client.get_docs_source(&[("topic", "flask")]).await,
        400,
        "the language parameter is required",
    )
    .await;
    assert_error(
        client.get_docs_source(&[("language", "")]).await,
        400,
        "the language parameter is required",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_resolve_the_documentation_from_a_json_body() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let response = client
        .post_docs_source(&DocsSourceForm {
            language: Some("Java".to_string()),
            topic: Some("spring".to_string()),
        })
        .await;

    assert_docs_source(response, "https://docs.spring.io/spring-framework/reference/").await;

    let response = client
        .post_docs_source(&DocsSourceForm {
            language: Some("javascript".to_string()),
            topic: None,
        })
        .await;

    assert_docs_source(response, "https://developer.mozilla.org/en-US/docs/Web/JavaScript").await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_with_not_found_for_unknown_languages_in_a_json_body() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .post_docs_source(&DocsSourceForm {
            language: Some("cobol".to_string()),
            topic: None,
        })
        .await;

    assert_not_found(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_with_bad_request_for_invalid_json_bodies() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_bad_request(client.post_raw("docs-source", "{ not json").await).await;

    assert_error(
        client
            .post_docs_source(&DocsSourceForm {
                language: None,
                topic: Some("flask".to_string()),
            })
            .await,
        400,
        "the language parameter is required",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_resolve_the_documentation_under_the_v1_prefix_too() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::with_v1_prefix(env.get_connection_info())
        .get_docs_source(&[("language", "csharp"), ("topic", "aspnet")])
        .await;

    assert_docs_source(response, "https://learn.microsoft.com/en-us/aspnet/core/").await;

    env.stop().await;
}
