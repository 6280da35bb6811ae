//! Tests for requirement validation.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;

use super::error::RequirementError;
use super::types::RequirementDraft;
use kodestudio_shared::AppError;

fn full_payload() -> serde_json::Value {
    json!({
        "date": "2025-02-03",
        "projectTitle": "Portal de clientes",
        "requestorName": "Luis Paredes",
        "requestorPhone": "999111222",
        "requestorEmail": "luis@empresa.pe",
        "department": "Cusco",
        "sponsorName": "María Quispe",
        "sponsorPhone": "999333444",
        "sponsorEmail": "maria@empresa.pe",
        "description": "Portal web para seguimiento de pedidos",
        "dependencies": "API de facturación",
        "requestedEndDate": "2025-06-30",
        "estimatedBudget": "12500.00",
        "status": "En Progreso",
        "priority": "Alto",
        "projectType": "Desarrollo Web",
        "technicalRequirements": "SSO, exportación a Excel",
        "businessJustification": "Reducir llamadas al call center",
        "riskAssessment": "Bajo"
    })
}

#[test]
fn test_full_payload_validates() {
    let draft: RequirementDraft = serde_json::from_value(full_payload()).unwrap();
    let data = draft.validate().unwrap();

    assert_eq!(data.project_title, "Portal de clientes");
    assert_eq!(data.date, NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
    assert_eq!(data.requested_end_date, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    assert_eq!(data.estimated_budget, dec!(12500));
}

#[test]
fn test_numeric_budget_accepted() {
    let mut payload = full_payload();
    payload["estimatedBudget"] = json!(8000);
    let draft: RequirementDraft = serde_json::from_value(payload).unwrap();
    assert_eq!(draft.validate().unwrap().estimated_budget, dec!(8000));
}

#[test]
fn test_reports_all_missing_fields_in_order() {
    let mut payload = full_payload();
    let obj = payload.as_object_mut().unwrap();
    obj.remove("sponsorEmail");
    obj.remove("date");
    obj.insert("riskAssessment".into(), json!("  "));

    let draft: RequirementDraft = serde_json::from_value(payload).unwrap();
    let err = draft.validate().unwrap_err();

    assert_eq!(
        err,
        RequirementError::MissingFields(vec!["date", "sponsorEmail", "riskAssessment"])
    );
    assert_eq!(
        err.to_string(),
        "Missing required fields: date, sponsorEmail, riskAssessment"
    );
}

#[test]
fn test_empty_draft_lists_every_field() {
    let err = RequirementDraft::default().validate().unwrap_err();
    let RequirementError::MissingFields(fields) = err else {
        panic!("expected missing fields");
    };
    assert_eq!(fields.len(), 19);
    assert_eq!(fields.first(), Some(&"date"));
    assert_eq!(fields.last(), Some(&"riskAssessment"));
}

#[test]
fn test_negative_budget_rejected() {
    let mut payload = full_payload();
    payload["estimatedBudget"] = json!("-1");
    let draft: RequirementDraft = serde_json::from_value(payload).unwrap();
    assert_eq!(draft.validate(), Err(RequirementError::NegativeBudget));
}

#[test]
fn test_converts_to_validation_error() {
    let err: AppError = RequirementError::NegativeBudget.into();
    assert!(matches!(err, AppError::Validation(_)));
}
