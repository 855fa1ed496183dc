//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://localhost:9164/management";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 관리 API 서버 접속 설정
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    /// 관리 API 베이스 URL
    pub base_url: Option<String>,
    /// 인증 토큰(직접값)
    pub token: Option<String>,
    /// 인증 토큰을 읽을 환경변수 이름
    pub token_env: Option<String>,
    /// 요청 타임아웃(ms)
    pub request_timeout_ms: Option<u64>,
}

impl Config {
    /// 우선순위가 높은 설정으로 기존 값을 덮어쓴다.
    /// Some인 필드만 반영하고 None은 기존 값을 유지한다.
    pub fn merge_from(&mut self, other: Config) {
        let server = other.server;
        if server.base_url.is_some() {
            self.server.base_url = server.base_url;
        }
        if server.token.is_some() {
            self.server.token = server.token;
        }
        if server.token_env.is_some() {
            self.server.token_env = server.token_env;
        }
        if server.request_timeout_ms.is_some() {
            self.server.request_timeout_ms = server.request_timeout_ms;
        }
    }
}

/// 플래그/환경변수/파일 병합이 끝난 최종 접속 정보.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub base_url: Url,
    pub token: Option<String>,
    pub request_timeout_ms: u64,
}
