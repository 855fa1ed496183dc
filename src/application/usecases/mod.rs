//! 명령 단위 유스케이스 모음.

pub mod inspect_config;
pub mod list_artifacts;
pub mod show_proxy_service;
