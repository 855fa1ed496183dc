//! 접속 정보(베이스 URL/토큰/타임아웃) 최종 해석.

use std::env;

use anyhow::{Context, Result};
use url::Url;

use crate::application::config::{
    DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS, ServerConfig, ServerSettings,
};

pub const SERVER_ENV: &str = "MICTL_SERVER";

/// 플래그 > 환경변수 > 설정 파일 > 기본값 순서로 베이스 URL을 정한다.
/// 토큰은 직접값이 우선이고, 없으면 token_env가 가리키는 환경변수를 읽는다.
pub fn resolve_server(server: &ServerConfig, flag_override: Option<&str>) -> Result<ServerSettings> {
    let base = flag_override
        .map(str::to_string)
        .or_else(|| env::var(SERVER_ENV).ok())
        .or_else(|| server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let base_url = Url::parse(&base)
        .with_context(|| format!("invalid management server URL: {base}"))?;

    let token = server.token.clone().or_else(|| {
        server
            .token_env
            .as_deref()
            .and_then(|name| env::var(name).ok())
    });

    Ok(ServerSettings {
        base_url,
        token,
        request_timeout_ms: server
            .request_timeout_ms
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
    })
}
