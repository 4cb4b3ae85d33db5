use docsrc_test_helpers::configuration;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::fixtures::SourcesFile;
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{assert_docs_source, assert_failed_to_reload_sources, assert_ok};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_reloading_the_language_sources() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let sources = SourcesFile::new(&json!({ "rust": { "default": "https://doc.rust-lang.org/" } }));

    let env = Started::new(&configuration::ephemeral_with_sources(sources.path(), false).into()).await;

    let client = Client::new(env.get_connection_info());

    assert_docs_source(
        client.get_docs_source(&[("language", "rust")]).await,
        "https://doc.rust-lang.org/",
    )
    .await;

    sources.write(&json!({ "rust": { "default": "https://doc.rust-lang.org/std/" } }));

    // The table in memory does not change until it is reloaded
    assert_docs_source(
        client.get_docs_source(&[("language", "rust")]).await,
        "https://doc.rust-lang.org/",
    )
    .await;

    assert_ok(client.reload_sources().await).await;

    assert_docs_source(
        client.get_docs_source(&[("language", "rust")]).await,
        "https://doc.rust-lang.org/std/",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_keep_the_previous_sources_when_the_reload_fails() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let sources = SourcesFile::new(&json!({ "rust": { "default": "https://doc.rust-lang.org/" } }));

    let env = Started::new(&configuration::ephemeral_with_sources(sources.path(), false).into()).await;

    let client = Client::new(env.get_connection_info());

    sources.write_raw("{ not json");

    assert_failed_to_reload_sources(client.reload_sources().await).await;

    assert_docs_source(
        client.get_docs_source(&[("language", "rust")]).await,
        "https://doc.rust-lang.org/",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_read_the_sources_on_every_request_when_configured_to() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let sources = SourcesFile::new(&json!({ "rust": { "default": "https://doc.rust-lang.org/" } }));

    let env = Started::new(&configuration::ephemeral_with_sources(sources.path(), true).into()).await;

    let client = Client::new(env.get_connection_info());

    sources.write(&json!({ "rust": { "default": "https://doc.rust-lang.org/book/" } }));

    assert_docs_source(
        client.get_docs_source(&[("language", "rust")]).await,
        "https://doc.rust-lang.org/book/",
    )
    .await;

    env.stop().await;
}
