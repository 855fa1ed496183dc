//! Proxy Service 단건 조회 응답 스키마.

use serde::Deserialize;

/// 서버가 돌려주는 Proxy Service 레코드.
/// 필드 값은 서버 응답 그대로이며 별도 검증을 하지 않는다.
///
/// ```xml
/// <proxyService>
///   <name>TestProxy</name>
///   <description>Sample proxy</description>
///   <inSequence>main</inSequence>
///   <outSequence>out</outSequence>
///   <faultSequence>fault</faultSequence>
///   <endpoint>BackendEP</endpoint>
///   <transport>http</transport>
///   <transport>https</transport>
/// </proxyService>
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyService {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub in_sequence: String,
    #[serde(default)]
    pub out_sequence: String,
    #[serde(default)]
    pub fault_sequence: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(rename = "transport", default)]
    pub transports: Vec<String>,
}

impl ProxyService {
    /// 속성 테이블용 (라벨, 값) 행 목록.
    /// 고정 속성 6행 뒤에 transport 항목마다 한 행이 붙는다.
    pub fn table_rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("NAME".to_string(), self.name.clone()),
            ("DESCRIPTION".to_string(), self.description.clone()),
            ("IN SEQUENCE".to_string(), self.in_sequence.clone()),
            ("OUT SEQUENCE".to_string(), self.out_sequence.clone()),
            ("FAULT SEQUENCE".to_string(), self.fault_sequence.clone()),
            ("ENDPOINT".to_string(), self.endpoint.clone()),
        ];

        for transport in &self.transports {
            rows.push(("TRANSPORTS".to_string(), transport.clone()));
        }

        rows
    }
}
