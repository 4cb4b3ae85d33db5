use docsrc_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::ConnectionInfo;
use crate::servers::api::v1::asserts::{assert_invalid_api_key, assert_missing_api_key, assert_ok};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_authenticate_requests_by_using_the_api_key_header() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_api_key("MyApiKey").into()).await;

    let response = Client::new(env.get_connection_info()).get_languages().await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_api_key_is_missing() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_api_key("MyApiKey").into()).await;

    let response = Client::new(ConnectionInfo::anonymous(&env.get_connection_info().bind_address))
        .get_languages()
        .await;

    assert_missing_api_key(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_api_key_is_invalid() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_api_key("MyApiKey").into()).await;

    let response = Client::new(ConnectionInfo::authenticated(
        &env.get_connection_info().bind_address,
        "INVALID API KEY",
    ))
    .get_languages()
    .await;

    assert_invalid_api_key(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_protect_every_endpoint_when_an_api_key_is_configured() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_api_key("MyApiKey").into()).await;

    let client = Client::new(ConnectionInfo::anonymous(&env.get_connection_info().bind_address));

    assert_missing_api_key(client.health_check().await).await;
    assert_missing_api_key(client.get_docs_source(&[("language", "python")]).await).await;
    assert_missing_api_key(client.reload_sources().await).await;
    assert_missing_api_key(client.get_user_sessions("u1").await).await;

    let v1_client = Client::with_v1_prefix(ConnectionInfo::anonymous(&env.get_connection_info().bind_address));

    assert_missing_api_key(v1_client.get_languages().await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_require_an_api_key_when_none_is_configured() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).reload_sources().await;

    assert_ok(response).await;

    env.stop().await;
}
