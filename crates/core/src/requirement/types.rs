//! Project requirement types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RequirementError;

/// Requirement form as submitted. Every field may be absent on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementDraft {
    /// Date of the request.
    pub date: Option<NaiveDate>,
    /// Project title.
    pub project_title: Option<String>,
    /// Requestor's full name.
    pub requestor_name: Option<String>,
    /// Requestor's phone.
    pub requestor_phone: Option<String>,
    /// Requestor's email.
    pub requestor_email: Option<String>,
    /// Requesting department (shown as the city column in listings).
    pub department: Option<String>,
    /// Sponsor's name.
    pub sponsor_name: Option<String>,
    /// Sponsor's phone.
    pub sponsor_phone: Option<String>,
    /// Sponsor's email.
    pub sponsor_email: Option<String>,
    /// Project description.
    pub description: Option<String>,
    /// Known dependencies.
    pub dependencies: Option<String>,
    /// Date the requestor wants the project finished.
    pub requested_end_date: Option<NaiveDate>,
    /// Budget the requestor expects.
    pub estimated_budget: Option<Decimal>,
    /// Workflow status (e.g. "En Progreso", "Aprobado", "Rechazado").
    pub status: Option<String>,
    /// Priority label ("Bajo", "Medio", "Alto", "Crítico").
    pub priority: Option<String>,
    /// Project type label.
    pub project_type: Option<String>,
    /// Technical requirements, free text.
    pub technical_requirements: Option<String>,
    /// Business justification.
    pub business_justification: Option<String>,
    /// Risk assessment.
    pub risk_assessment: Option<String>,
}

/// A validated requirement, ready to store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct RequirementData {
    pub date: NaiveDate,
    pub project_title: String,
    pub requestor_name: String,
    pub requestor_phone: String,
    pub requestor_email: String,
    pub department: String,
    pub sponsor_name: String,
    pub sponsor_phone: String,
    pub sponsor_email: String,
    pub description: String,
    pub dependencies: String,
    pub requested_end_date: NaiveDate,
    pub estimated_budget: Decimal,
    pub status: String,
    pub priority: String,
    pub project_type: String,
    pub technical_requirements: String,
    pub business_justification: String,
    pub risk_assessment: String,
}

/// Collects missing field names while pulling values out of a draft.
struct Collector {
    missing: Vec<&'static str>,
}

impl Collector {
    fn text(&mut self, value: Option<String>, field: &'static str) -> String {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    fn value<T: Default>(&mut self, value: Option<T>, field: &'static str) -> T {
        value.unwrap_or_else(|| {
            self.missing.push(field);
            T::default()
        })
    }
}

impl RequirementDraft {
    /// Validates the draft, reporting every missing field at once.
    pub fn validate(self) -> Result<RequirementData, RequirementError> {
        let mut c = Collector {
            missing: Vec::new(),
        };

        let data = RequirementData {
            date: c.value(self.date, "date"),
            project_title: c.text(self.project_title, "projectTitle"),
            requestor_name: c.text(self.requestor_name, "requestorName"),
            requestor_phone: c.text(self.requestor_phone, "requestorPhone"),
            requestor_email: c.text(self.requestor_email, "requestorEmail"),
            department: c.text(self.department, "department"),
            sponsor_name: c.text(self.sponsor_name, "sponsorName"),
            sponsor_phone: c.text(self.sponsor_phone, "sponsorPhone"),
            sponsor_email: c.text(self.sponsor_email, "sponsorEmail"),
            description: c.text(self.description, "description"),
            dependencies: c.text(self.dependencies, "dependencies"),
            requested_end_date: c.value(self.requested_end_date, "requestedEndDate"),
            estimated_budget: c.value(self.estimated_budget, "estimatedBudget"),
            status: c.text(self.status, "status"),
            priority: c.text(self.priority, "priority"),
            project_type: c.text(self.project_type, "projectType"),
            technical_requirements: c.text(self.technical_requirements, "technicalRequirements"),
            business_justification: c.text(self.business_justification, "businessJustification"),
            risk_assessment: c.text(self.risk_assessment, "riskAssessment"),
        };

        if !c.missing.is_empty() {
            return Err(RequirementError::MissingFields(c.missing));
        }
        if data.estimated_budget < Decimal::ZERO {
            return Err(RequirementError::NegativeBudget);
        }

        Ok(data)
    }
}

/// Aggregate counts for the requirements dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementStats {
    /// Number of stored requirements.
    pub total_requirements: u64,
    /// Count per status.
    pub status_counts: BTreeMap<String, u64>,
    /// Count per priority.
    pub priority_counts: BTreeMap<String, u64>,
    /// Count per department.
    pub department_counts: BTreeMap<String, u64>,
}
