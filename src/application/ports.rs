//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::artifact::{ArtifactKind, ArtifactList};
use crate::domain::proxy::ProxyService;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 관리 REST API 연동 추상화 포트.
#[async_trait]
pub trait ManagementGateway: Send + Sync {
    /// 종류별 아티팩트 목록 조회
    async fn fetch_artifact_list(&self, kind: ArtifactKind) -> Result<ArtifactList>;
    /// 이름으로 Proxy Service 단건 조회
    async fn fetch_proxy_service(&self, name: &str) -> Result<ProxyService>;
}

/// 설정과 플래그 오버라이드로 게이트웨이를 생성하는 팩토리 포트.
pub trait GatewayFactory: Send + Sync {
    fn build(
        &self,
        config: &Config,
        server_override: Option<&str>,
    ) -> Result<Box<dyn ManagementGateway>>;
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    /// "No. of APIs: 3" 형식의 개수 헤더
    fn count(&self, label: &str, count: i32);
    /// 목록 항목 한 줄
    fn item(&self, name: &str);
    /// 2열 속성 테이블
    fn table(&self, rows: &[(String, String)]);
}
