//! 병합된 설정과 최종 접속 정보를 점검용 JSON으로 만든다.

use anyhow::Result;
use serde_json::json;

use super::{load_merged_config, resolve_server};

/// 탐색 경로, 적용된 파일, 유효 설정, 해석된 접속 정보를 한 번에 보여준다.
/// 토큰 값 자체는 노출하지 않고 설정 여부만 표시한다.
pub fn inspect_pretty_json() -> Result<String> {
    let loaded = load_merged_config()?;
    let settings = resolve_server(&loaded.config.server, None)?;

    let value = json!({
        "searched_paths": loaded
            .searched_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
        "loaded_paths": loaded
            .loaded_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
        "effective": loaded.config,
        "resolved_server": {
            "base_url": settings.base_url.to_string(),
            "token": if settings.token.is_some() { "(set)" } else { "(none)" },
            "request_timeout_ms": settings.request_timeout_ms,
        },
    });

    Ok(serde_json::to_string_pretty(&value)?)
}
