use kira_poolcalc::ctx::report_options;
use kira_poolcalc::pooling::PoolingOptions;
use kira_poolcalc::schema::v1::{ConcentrationSource, PoolcalcV1};

#[test]
fn schema_roundtrip_v1() {
    let report = PoolcalcV1::empty("0.0.0-test", report_options(&PoolingOptions::default()));
    let json = serde_json::to_string(&report).unwrap();
    let decoded: PoolcalcV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.tool, "kira-poolcalc");
    assert_eq!(decoded.schema_version, "v1");
    assert_eq!(decoded.options.desired_final_volume, 400.0);
    assert_eq!(
        decoded.options.concentration_source,
        ConcentrationSource::Calculated
    );
    assert!(decoded.final_pool.is_none());
}
