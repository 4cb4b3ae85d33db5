use docsrc::servers::apis::v1::context::languages::resources::{Language, LanguageList};
use docsrc_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_getting_the_language_catalog() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).get_languages().await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

    let catalog = response.json::<LanguageList>().await.unwrap();

    let slugs: Vec<&str> = catalog.languages.iter().map(|language| language.slug.as_str()).collect();
    assert_eq!(slugs, vec!["javascript", "python", "java", "csharp", "html", "css"]);

    assert_eq!(
        catalog.languages[1],
        Language {
            name: "Python".to_string(),
            slug: "python".to_string(),
            frameworks: vec!["Flask".to_string(), "Django".to_string(), "PyTest".to_string()],
        }
    );

    env.stop().await;
}

#[tokio::test]
async fn should_serve_the_language_catalog_under_the_v1_prefix_too() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let root = Client::new(env.get_connection_info())
        .get_languages()
        .await
        .json::<LanguageList>()
        .await
        .unwrap();

    let v1 = Client::with_v1_prefix(env.get_connection_info())
        .get_languages()
        .await
        .json::<LanguageList>()
        .await
        .unwrap();

    assert_eq!(root, v1);

    env.stop().await;
}
