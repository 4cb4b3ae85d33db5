use docsrc_test_helpers::configuration;
use tracing::level_filters::LevelFilter;
use uuid::Uuid;

use crate::common::fixtures::invalid_session_ids;
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_bad_request, assert_not_found, assert_session, assert_session_created, assert_session_list,
};
use crate::servers::api::v1::client::{Client, CreateSessionForm};
use crate::servers::api::Started;

fn form(language: &str, topic: Option<&str>, user_id: Option<&str>) -> CreateSessionForm {
    CreateSessionForm {
        language: language.to_string(),
        topic: topic.map(ToString::to_string),
        user_id: user_id.map(ToString::to_string),
    }
}

#[tokio::test]
async fn should_allow_creating_a_learning_session() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let created = assert_session_created(client.create_session(&form("Python", Some("basics"), Some("u1"))).await).await;

    assert!(Uuid::try_parse(&created.session_id).is_ok());

    let session = assert_session(client.get_session(&created.session_id).await).await;

    assert_eq!(session.id, created.session_id);
    assert_eq!(session.user_id, Some("u1".to_string()));
    assert_eq!(session.language, "python");
    assert_eq!(session.topic, "basics");

    env.stop().await;
}

#[tokio::test]
async fn should_store_the_default_topic_and_no_user_when_they_are_not_provided() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let created = assert_session_created(client.create_session(&form("java", None, None)).await).await;

    let session = assert_session(client.get_session(&created.session_id).await).await;

    assert_eq!(session.topic, "default");
    assert_eq!(session.user_id, None);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_creating_a_session_without_a_language() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_bad_request(client.create_session(&form("", None, None)).await).await;
    assert_bad_request(client.post_raw("session", r#"{ "topic": "basics" }"#).await).await;
    assert_bad_request(client.post_raw("session", "{ not json").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_session_with_an_invalid_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    for invalid_id in &invalid_session_ids() {
        assert_bad_request(client.get_session(invalid_id).await).await;
    }

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_session_that_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_session(&Uuid::new_v4().to_string())
        .await;

    assert_not_found(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_listing_the_sessions_of_a_user() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let first = assert_session_created(client.create_session(&form("python", Some("flask"), Some("u1"))).await).await;
    let second = assert_session_created(client.create_session(&form("css", None, Some("u1"))).await).await;
    assert_session_created(client.create_session(&form("python", None, Some("u2"))).await).await;
    assert_session_created(client.create_session(&form("python", None, None)).await).await;

    let list = assert_session_list(client.get_user_sessions("u1").await).await;

    let mut ids: Vec<String> = list.sessions.into_iter().map(|session| session.id).collect();
    ids.sort();

    let mut expected = vec![first.session_id, second.session_id];
    expected.sort();

    assert_eq!(ids, expected);

    env.stop().await;
}

#[tokio::test]
async fn should_return_an_empty_list_for_users_without_sessions() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let list = assert_session_list(Client::new(env.get_connection_info()).get_user_sessions("nobody").await).await;

    assert!(list.sessions.is_empty());

    env.stop().await;
}
