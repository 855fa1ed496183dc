//! 서버에 배포된 아티팩트 종류와 목록 응답 스키마.

use serde::Deserialize;

/// 목록 조회가 가능한 아티팩트 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Api,
    Endpoint,
    Sequence,
}

impl ArtifactKind {
    /// 관리 API 상의 리소스 경로 세그먼트.
    pub fn resource_path(&self) -> &'static str {
        match self {
            ArtifactKind::Api => "apis",
            ArtifactKind::Endpoint => "endpoints",
            ArtifactKind::Sequence => "sequences",
        }
    }

    /// 목록 헤더에 쓰는 복수형 표기.
    pub fn plural_label(&self) -> &'static str {
        match self {
            ArtifactKind::Api => "APIs",
            ArtifactKind::Endpoint => "Endpoints",
            ArtifactKind::Sequence => "Sequences",
        }
    }
}

/// 목록 응답 XML 엔벨로프.
///
/// ```xml
/// <list>
///   <count>2</count>
///   <name>HealthAPI</name>
///   <name>OrderAPI</name>
/// </list>
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactList {
    pub count: i32,
    #[serde(rename = "name", default)]
    pub names: Vec<String>,
}
