//! 게이트웨이 팩토리 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{GatewayFactory, ManagementGateway};
use crate::infrastructure::config::resolve_server;
use crate::infrastructure::management::RestManagementClient;

/// 접속 정보를 해석해 REST 클라이언트를 생성하는 어댑터.
pub struct RestGatewayFactory;

impl GatewayFactory for RestGatewayFactory {
    fn build(
        &self,
        config: &Config,
        server_override: Option<&str>,
    ) -> Result<Box<dyn ManagementGateway>> {
        let settings = resolve_server(&config.server, server_override)?;
        Ok(Box::new(RestManagementClient::new(&settings)?))
    }
}
