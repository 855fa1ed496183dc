//! Tests for the proxy service attribute table

use mictl::domain::proxy::ProxyService;
use mictl::infrastructure::render::render_table;

fn sample_proxy() -> ProxyService {
    ProxyService {
        name: "TestProxy".to_string(),
        description: "Sample proxy".to_string(),
        in_sequence: "main".to_string(),
        out_sequence: "out".to_string(),
        fault_sequence: "fault".to_string(),
        endpoint: "BackendEP".to_string(),
        transports: vec!["http".to_string(), "https".to_string()],
    }
}

#[test]
fn given_proxy_with_two_transports_when_building_rows_then_eight_rows_result() {
    // 고정 속성 6행 + transport 2행
    let rows = sample_proxy().table_rows();

    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], ("NAME".to_string(), "TestProxy".to_string()));
    assert_eq!(rows[5], ("ENDPOINT".to_string(), "BackendEP".to_string()));
    assert_eq!(rows[6], ("TRANSPORTS".to_string(), "http".to_string()));
    assert_eq!(rows[7], ("TRANSPORTS".to_string(), "https".to_string()));
}

#[test]
fn given_proxy_without_transports_when_building_rows_then_only_attributes_remain() {
    let mut proxy = sample_proxy();
    proxy.transports.clear();

    let rows = proxy.table_rows();

    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|(label, _)| label != "TRANSPORTS"));
}

#[test]
fn given_rows_when_rendering_then_each_row_is_framed_by_separators() {
    let rows = sample_proxy().table_rows();

    let lines = render_table(&rows);

    // 상단 테두리 + 행마다 (내용, 구분선) 한 쌍, 마지막 구분선은 생략
    assert_eq!(lines.len(), rows.len() * 2);
    assert!(lines[0].starts_with('+'));
    assert!(lines[1].contains("TestProxy"));
    assert!(lines.last().unwrap().contains("https"));
}
