//! mictl library root.
//! 실행 중인 통합 서버의 관리 REST API를 조회하는 CLI 계층들을 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::{AppComposition, CliAction};

/// 라이브러리 직접 호출용 실행 함수.
/// 설정 점검 결과는 stdout으로 바로 출력한다.
pub async fn run(action: CliAction) -> Result<()> {
    let composition = AppComposition::default();

    match action {
        CliAction::List { kind, server } => {
            composition
                .list_artifacts_usecase()
                .execute(kind, server.as_deref())
                .await
        }
        CliAction::ShowProxyService { name, server } => {
            composition
                .show_proxy_service_usecase()
                .execute(&name, server.as_deref())
                .await
        }
        CliAction::InspectConfig => {
            let json = composition.inspect_config_usecase().execute()?;
            println!("{json}");
            Ok(())
        }
    }
}
