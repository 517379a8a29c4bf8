use crate::core::request::{Callback, PendingRequest};
use crate::domain::ports::ConfigProvider;
use reqwest::{Client, Method};
use tokio::task::JoinHandle;

/// Client for the REST endpoints of the migration service under test.
///
/// The endpoint is not validated; a malformed one surfaces as a request error
/// once an operation is dispatched. Every operation must be called from
/// within a Tokio runtime.
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoint: String,
    client: Client,
}

impl ApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Joins the endpoint and `path` verbatim, without any encoding.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// `GET /resources`: the current picture of both clouds.
    pub fn resources(&self) -> PendingRequest {
        self.dispatch(Method::GET, "/resources")
    }

    /// `POST /reset`: asks the service to clean up and set up its clouds again.
    pub fn reset(&self, callback: Option<Callback>) -> JoinHandle<()> {
        self.dispatch(Method::POST, "/reset").end(callback)
    }

    /// `POST /tenants/{tenant_id}`: starts a tenant migration.
    ///
    /// `tenant_id` goes into the path as given; callers pass a path-safe id.
    pub fn migrate_tenant(&self, tenant_id: &str, callback: Option<Callback>) -> JoinHandle<()> {
        self.dispatch(Method::POST, &format!("/tenants/{}", tenant_id))
            .end(callback)
    }

    /// `POST /hosts/{host_name}`: starts a host evacuation.
    pub fn evacuate_host(&self, host_name: &str, callback: Option<Callback>) -> JoinHandle<()> {
        self.dispatch(Method::POST, &format!("/hosts/{}", host_name))
            .end(callback)
    }

    fn dispatch(&self, method: Method, path: &str) -> PendingRequest {
        let url = self.url_for(path);
        let request = self.client.request(method.clone(), &url);
        PendingRequest::dispatch(method, url, request)
    }
}
