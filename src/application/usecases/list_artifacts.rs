//! 아티팩트 목록 조회 유스케이스.

use anyhow::Result;

use crate::application::ports::{ConfigRepository, GatewayFactory, Reporter};
use crate::domain::artifact::ArtifactKind;

/// 종류별 목록을 한 번 조회해 개수와 이름을 출력한다.
/// APIs/Endpoints/Sequences 모두 경로만 다르고 흐름은 동일하다.
pub struct ListArtifactsUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ListArtifactsUseCase<'a> {
    /// 목록 조회 진입점.
    /// 실패(접속 불가/비정상 상태/손상된 XML)는 출력 없이 에러로 전파된다.
    pub async fn execute(&self, kind: ArtifactKind, server_override: Option<&str>) -> Result<()> {
        let config = self.config_repo.load()?;
        let gateway = self.gateway_factory.build(&config, server_override)?;

        let artifacts = gateway.fetch_artifact_list(kind).await?;

        self.reporter.count(kind.plural_label(), artifacts.count);
        if artifacts.count > 0 {
            for name in &artifacts.names {
                self.reporter.item(name);
            }
        }

        Ok(())
    }
}
