//! Wire contract tests: strict deserialization, sentinel handling.

use serde_json::json;

use crate::protocol::{AnalysisInput, AnalysisResult, RiskLevel, Runway};

fn success_body(runway: serde_json::Value, risk_level: &str) -> serde_json::Value {
    json!({
        "metrics": {
            "profit": 3000.0,
            "profit_margin": 30.0,
            "burn_rate": 7000.0,
            "runway": runway,
            "growth_score": 62.0
        },
        "forecasts": {
            "profit": vec![3000.0; 12],
            "revenue": vec![10000.0; 12]
        },
        "strategy": "Hold spending flat and reinvest the surplus.",
        "risk_level": risk_level
    })
}

#[test]
fn request_body_matches_contract() {
    let input = AnalysisInput {
        revenue: 10_000.0,
        expenses: 7_000.0,
        cash: 5_000.0,
    };
    let body = serde_json::to_value(&input).unwrap();
    assert_eq!(
        body,
        json!({ "revenue": 10000.0, "expenses": 7000.0, "cash": 5000.0 })
    );
}

#[test]
fn success_body_deserializes() {
    let result: AnalysisResult = serde_json::from_value(success_body(json!(0.71), "low")).unwrap();
    assert_eq!(result.metrics.profit, 3000.0);
    assert_eq!(result.metrics.runway, Runway::Finite(0.71));
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.forecasts.profit.len(), 12);
}

#[test]
fn null_runway_is_unbounded() {
    let result: AnalysisResult =
        serde_json::from_value(success_body(json!(null), "low")).unwrap();
    assert!(result.metrics.runway.is_unbounded());
    assert!(result.metrics.runway.as_f64().is_infinite());
}

#[test]
fn unbounded_runway_serializes_as_null() {
    let v = serde_json::to_value(Runway::Unbounded).unwrap();
    assert_eq!(v, json!(null));
    let v = serde_json::to_value(Runway::Finite(3.5)).unwrap();
    assert_eq!(v, json!(3.5));
}

#[test]
fn risk_level_is_case_insensitive() {
    for raw in ["MEDIUM", "Medium", "medium", "mEdIuM"] {
        let result: AnalysisResult =
            serde_json::from_value(success_body(json!(1.0), raw)).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.risk_level.to_string(), "Medium");
    }
}

#[test]
fn unknown_risk_level_is_malformed() {
    let err = serde_json::from_value::<AnalysisResult>(success_body(json!(1.0), "extreme"));
    assert!(err.is_err());
}

#[test]
fn wrong_length_forecast_is_malformed() {
    let mut body = success_body(json!(1.0), "low");
    body["forecasts"]["profit"] = json!([1.0, 2.0, 3.0]);
    assert!(serde_json::from_value::<AnalysisResult>(body).is_err());
}
