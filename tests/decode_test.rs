//! Tests for the XML response schemas

use mictl::domain::artifact::ArtifactList;
use mictl::domain::proxy::ProxyService;

#[test]
fn given_envelope_with_names_when_decoding_then_count_and_names_match() {
    let body = "<list>\
        <count>3</count>\
        <name>HealthAPI</name>\
        <name>OrderAPI</name>\
        <name>StockAPI</name>\
        </list>";

    let list: ArtifactList = quick_xml::de::from_str(body).unwrap();

    assert_eq!(list.count, 3);
    assert_eq!(list.names, vec!["HealthAPI", "OrderAPI", "StockAPI"]);
}

#[test]
fn given_empty_envelope_when_decoding_then_names_default_to_empty() {
    let body = "<list><count>0</count></list>";

    let list: ArtifactList = quick_xml::de::from_str(body).unwrap();

    assert_eq!(list.count, 0);
    assert!(list.names.is_empty());
}

#[test]
fn given_malformed_xml_when_decoding_then_error_is_returned() {
    let truncated = "<list><count>2</count><name>HealthAPI";
    assert!(quick_xml::de::from_str::<ArtifactList>(truncated).is_err());

    let non_numeric = "<list><count>many</count></list>";
    assert!(quick_xml::de::from_str::<ArtifactList>(non_numeric).is_err());
}

#[test]
fn given_proxy_record_when_decoding_then_all_attributes_are_read() {
    let body = "<proxyService>\
        <name>TestProxy</name>\
        <description>Sample proxy</description>\
        <inSequence>main</inSequence>\
        <outSequence>out</outSequence>\
        <faultSequence>fault</faultSequence>\
        <endpoint>BackendEP</endpoint>\
        <transport>http</transport>\
        <transport>https</transport>\
        </proxyService>";

    let proxy: ProxyService = quick_xml::de::from_str(body).unwrap();

    assert_eq!(proxy.name, "TestProxy");
    assert_eq!(proxy.description, "Sample proxy");
    assert_eq!(proxy.in_sequence, "main");
    assert_eq!(proxy.out_sequence, "out");
    assert_eq!(proxy.fault_sequence, "fault");
    assert_eq!(proxy.endpoint, "BackendEP");
    assert_eq!(proxy.transports, vec!["http", "https"]);
}

#[test]
fn given_proxy_record_without_optional_elements_when_decoding_then_fields_default() {
    let body = "<proxyService><name>BareProxy</name></proxyService>";

    let proxy: ProxyService = quick_xml::de::from_str(body).unwrap();

    assert_eq!(proxy.name, "BareProxy");
    assert!(proxy.description.is_empty());
    assert!(proxy.transports.is_empty());
}
