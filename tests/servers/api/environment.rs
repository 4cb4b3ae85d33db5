use std::net::SocketAddr;
use std::sync::Arc;

use docsrc::bootstrap::app::initialize_with_configuration;
use docsrc::bootstrap::jobs::make_rust_tls;
use docsrc::core::DocsService;
use docsrc::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use docsrc_configuration::{Configuration, HttpApi};
use futures::executor::block_on;

use super::connection_info::ConnectionInfo;

pub struct Environment<S> {
    pub config: Arc<HttpApi>,
    pub docs: Arc<DocsService>,
    pub server: ApiServer<S>,
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let docs = initialize_with_configuration(configuration);

        let config = Arc::new(configuration.http_api.clone());

        let bind_to = config.bind_address;

        let tls = block_on(make_rust_tls(&config.tsl_config)).map(|tls| tls.expect("tls config failed"));

        let server = ApiServer::new(Launcher::new(bind_to, tls));

        Self { config, docs, server }
    }

    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config.clone(),
            docs: self.docs.clone(),
            server: self.server.start(self.docs, self.config).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            docs: self.docs,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn get_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            bind_address: self.server.state.binding.to_string(),
            api_key: self.config.api_key.clone(),
        }
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
