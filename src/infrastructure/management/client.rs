//! 관리 API HTTP 클라이언트 구현.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::application::config::ServerSettings;
use crate::application::ports::ManagementGateway;
use crate::domain::artifact::{ArtifactKind, ArtifactList};
use crate::domain::proxy::ProxyService;

const PROXY_SERVICES_PATH: &str = "proxyservices";
const PROXY_NAME_PARAM: &str = "proxyServiceName";

pub struct RestManagementClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl RestManagementClient {
    /// 접속 정보를 받아 클라이언트를 생성한다.
    pub fn new(settings: &ServerSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .context("management: failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            token: settings.token.clone(),
        })
    }

    fn endpoint(&self, resource: &str) -> Result<Url> {
        // 베이스 경로 뒤에 리소스 세그먼트를 덧붙인다.
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("management: base URL cannot hold a path: {}", self.base_url))?
            .pop_if_empty()
            .push(resource);
        Ok(url)
    }

    fn proxy_service_endpoint(&self, name: &str) -> Result<Url> {
        let mut url = self.endpoint(PROXY_SERVICES_PATH)?;
        url.query_pairs_mut().append_pair(PROXY_NAME_PARAM, name);
        Ok(url)
    }

    fn request(&self, url: Url) -> RequestBuilder {
        let req = self
            .client
            .get(url)
            .header("User-Agent", "mictl")
            .header("Accept", "application/xml");

        if let Some(token) = &self.token {
            req.bearer_auth(token)
        } else {
            req
        }
    }

    /// 단일 GET 요청 후 성공 상태면 XML 본문을 디코드한다.
    /// 접속 실패와 비정상 상태는 재시도 없이 그대로 에러가 된다.
    async fn get_xml<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T> {
        debug!(url = %url, "management: GET");

        let resp = self
            .request(url.clone())
            .send()
            .await
            .with_context(|| format!("management: unable to connect to {url}"))?;

        let status = resp.status();
        debug!(status = %status, "management: response");

        let body = resp
            .text()
            .await
            .with_context(|| format!("management: failed to read {what} body"))?;

        if !status.is_success() {
            anyhow::bail!("management: failed to fetch {what} ({status})");
        }

        quick_xml::de::from_str(&body)
            .with_context(|| format!("management: invalid {what} XML response"))
    }
}

#[async_trait]
impl ManagementGateway for RestManagementClient {
    async fn fetch_artifact_list(&self, kind: ArtifactKind) -> Result<ArtifactList> {
        let url = self.endpoint(kind.resource_path())?;
        self.get_xml(url, kind.resource_path()).await
    }

    async fn fetch_proxy_service(&self, name: &str) -> Result<ProxyService> {
        let url = self.proxy_service_endpoint(name)?;
        self.get_xml(url, "proxy service").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::DEFAULT_REQUEST_TIMEOUT_MS;

    fn client_for(base: &str) -> RestManagementClient {
        let settings = ServerSettings {
            base_url: Url::parse(base).unwrap(),
            token: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        };
        RestManagementClient::new(&settings).unwrap()
    }

    #[test]
    fn endpoint_appends_resource_to_base_path() {
        let client = client_for("https://localhost:9164/management");
        let url = client.endpoint("apis").unwrap();
        assert_eq!(url.as_str(), "https://localhost:9164/management/apis");
    }

    #[test]
    fn endpoint_handles_trailing_slash_in_base() {
        let client = client_for("https://localhost:9164/management/");
        let url = client.endpoint("sequences").unwrap();
        assert_eq!(url.as_str(), "https://localhost:9164/management/sequences");
    }

    #[test]
    fn proxy_service_endpoint_encodes_name_query() {
        let client = client_for("https://localhost:9164/management");
        let url = client.proxy_service_endpoint("Order Proxy").unwrap();
        assert_eq!(
            url.as_str(),
            "https://localhost:9164/management/proxyservices?proxyServiceName=Order+Proxy"
        );
    }
}
