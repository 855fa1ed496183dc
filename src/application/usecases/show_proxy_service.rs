//! Proxy Service 단건 조회 유스케이스.

use anyhow::Result;

use crate::application::ports::{ConfigRepository, GatewayFactory, Reporter};

/// 이름으로 Proxy Service 정보를 조회해 속성 테이블로 출력한다.
pub struct ShowProxyServiceUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ShowProxyServiceUseCase<'a> {
    /// 단건 조회 진입점. 이름 플래그 검증은 CLI 계층에서 끝난 상태다.
    pub async fn execute(&self, name: &str, server_override: Option<&str>) -> Result<()> {
        let config = self.config_repo.load()?;
        let gateway = self.gateway_factory.build(&config, server_override)?;

        let proxy = gateway.fetch_proxy_service(name).await?;

        self.reporter.table(&proxy.table_rows());

        Ok(())
    }
}
