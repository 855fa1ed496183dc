//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::list_artifacts::ListArtifactsUseCase;
use crate::application::usecases::show_proxy_service::ShowProxyServiceUseCase;
use crate::infrastructure::adapters::{ConsoleReporter, JsonConfigRepository, RestGatewayFactory};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    gateway_factory: RestGatewayFactory,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            gateway_factory: RestGatewayFactory,
            reporter: ConsoleReporter,
        }
    }
}

impl AppComposition {
    /// 목록 조회 유스케이스를 생성한다.
    pub fn list_artifacts_usecase(&self) -> ListArtifactsUseCase<'_> {
        ListArtifactsUseCase {
            config_repo: &self.config_repo,
            gateway_factory: &self.gateway_factory,
            reporter: &self.reporter,
        }
    }

    /// Proxy Service 조회 유스케이스를 생성한다.
    pub fn show_proxy_service_usecase(&self) -> ShowProxyServiceUseCase<'_> {
        ShowProxyServiceUseCase {
            config_repo: &self.config_repo,
            gateway_factory: &self.gateway_factory,
            reporter: &self.reporter,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}
