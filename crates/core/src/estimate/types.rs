//! Estimator input and output types, plus the business rate tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of engagement, which determines the monthly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    /// Technology consulting.
    #[serde(rename = "Consultoría")]
    Consulting,
    /// Web development.
    #[serde(rename = "Desarrollo Web")]
    WebDevelopment,
    /// Mobile app development.
    #[serde(rename = "Desarrollo App Móvil")]
    MobileApp,
    /// Desktop application.
    #[serde(rename = "Aplicación de Escritorio")]
    DesktopApp,
    /// Anything else; also the fallback for unknown labels.
    #[serde(rename = "Otro")]
    Other,
}

impl ProjectType {
    /// Every project type, in the order the simulator lists them.
    pub const ALL: [Self; 5] = [
        Self::MobileApp,
        Self::WebDevelopment,
        Self::DesktopApp,
        Self::Consulting,
        Self::Other,
    ];

    /// Resolves a form label. Unknown labels fall back to [`ProjectType::Other`].
    ///
    /// The simulator form has always posted "Desarollo" (one `r`), so both
    /// spellings are accepted.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Consultoría" => Self::Consulting,
            "Desarrollo Web" | "Desarollo Web" => Self::WebDevelopment,
            "Desarrollo App Móvil" | "Desarollo App Móvil" => Self::MobileApp,
            "Aplicación de Escritorio" => Self::DesktopApp,
            _ => Self::Other,
        }
    }

    /// Canonical label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Consulting => "Consultoría",
            Self::WebDevelopment => "Desarrollo Web",
            Self::MobileApp => "Desarrollo App Móvil",
            Self::DesktopApp => "Aplicación de Escritorio",
            Self::Other => "Otro",
        }
    }

    /// Price of one month of engagement.
    #[must_use]
    pub fn monthly_rate(self) -> Decimal {
        match self {
            Self::Consulting | Self::Other => Decimal::from(2000),
            Self::WebDevelopment => Decimal::from(2500),
            Self::MobileApp => Decimal::from(3200),
            Self::DesktopApp => Decimal::from(4000),
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Urgency tier, which scales the base cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Low urgency.
    #[serde(rename = "Bajo")]
    Low,
    /// Normal urgency; also the fallback for unknown labels.
    #[serde(rename = "Medio")]
    Medium,
    /// High urgency.
    #[serde(rename = "Alto")]
    High,
    /// Critical urgency.
    #[serde(rename = "Crítico")]
    Critical,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Resolves a form label. Unknown labels fall back to [`Priority::Medium`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Bajo" => Self::Low,
            "Alto" => Self::High,
            "Crítico" => Self::Critical,
            _ => Self::Medium,
        }
    }

    /// Canonical label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Bajo",
            Self::Medium => "Medio",
            Self::High => "Alto",
            Self::Critical => "Crítico",
        }
    }

    /// Multiplier applied to the base cost.
    #[must_use]
    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Low => Decimal::new(105, 2),
            Self::Medium => Decimal::new(1125, 3),
            Self::High => Decimal::new(120, 2),
            Self::Critical => Decimal::new(125, 2),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the estimator looks at. Built fresh for each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimationInput {
    /// Project category.
    pub project_type: ProjectType,
    /// Urgency tier.
    pub priority: Priority,
    /// Number of technical requirements.
    pub technical_requirements: u32,
    /// First day of the engagement. `None` when missing or unparseable.
    pub start_date: Option<NaiveDate>,
    /// Last day of the engagement. `None` when missing or unparseable.
    pub end_date: Option<NaiveDate>,
}

impl EstimationInput {
    /// Builds an input from raw form values, applying every fallback.
    ///
    /// Negative requirement counts are treated as zero.
    #[must_use]
    pub fn from_form(
        project_type: &str,
        priority: &str,
        technical_requirements: i64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            project_type: ProjectType::from_label(project_type),
            priority: Priority::from_label(priority),
            technical_requirements: u32::try_from(technical_requirements.max(0))
                .unwrap_or(u32::MAX),
            start_date,
            end_date,
        }
    }
}

/// Intermediate values of an estimate, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    /// Resolved project type.
    pub project_type: ProjectType,
    /// Resolved priority.
    pub priority: Priority,
    /// Monthly rate used.
    pub monthly_rate: Decimal,
    /// Whole months in the span, after borrowing.
    pub months: i64,
    /// Days left over after the whole months.
    pub days: i64,
    /// `months × rate + days × rate / 30`, rounded to cents.
    pub base_cost: Decimal,
    /// Priority multiplier used.
    pub multiplier: Decimal,
    /// Technical requirement surcharge added after the multiplier.
    pub surcharge: Decimal,
}

/// Outcome of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Non-negative amount, a multiple of 50.
    pub budget: Decimal,
    /// How the amount was reached.
    pub breakdown: EstimateBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("Consultoría", ProjectType::Consulting, dec!(2000))]
    #[case("Desarrollo Web", ProjectType::WebDevelopment, dec!(2500))]
    #[case("Desarollo Web", ProjectType::WebDevelopment, dec!(2500))]
    #[case("Desarrollo App Móvil", ProjectType::MobileApp, dec!(3200))]
    #[case("Desarollo App Móvil", ProjectType::MobileApp, dec!(3200))]
    #[case("Aplicación de Escritorio", ProjectType::DesktopApp, dec!(4000))]
    #[case("Otro", ProjectType::Other, dec!(2000))]
    #[case("Blockchain", ProjectType::Other, dec!(2000))]
    #[case("", ProjectType::Other, dec!(2000))]
    fn test_project_type_rates(
        #[case] label: &str,
        #[case] expected: ProjectType,
        #[case] rate: Decimal,
    ) {
        let resolved = ProjectType::from_label(label);
        assert_eq!(resolved, expected);
        assert_eq!(resolved.monthly_rate(), rate);
    }

    #[rstest]
    #[case("Bajo", Priority::Low, dec!(1.05))]
    #[case("Medio", Priority::Medium, dec!(1.125))]
    #[case("Alto", Priority::High, dec!(1.20))]
    #[case("Crítico", Priority::Critical, dec!(1.25))]
    #[case("Urgentísimo", Priority::Medium, dec!(1.125))]
    #[case(" Alto ", Priority::High, dec!(1.20))]
    fn test_priority_multipliers(
        #[case] label: &str,
        #[case] expected: Priority,
        #[case] multiplier: Decimal,
    ) {
        let resolved = Priority::from_label(label);
        assert_eq!(resolved, expected);
        assert_eq!(resolved.multiplier(), multiplier);
    }

    #[test]
    fn test_labels_round_trip() {
        for project_type in ProjectType::ALL {
            assert_eq!(ProjectType::from_label(project_type.label()), project_type);
        }
        for priority in Priority::ALL {
            assert_eq!(Priority::from_label(priority.label()), priority);
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ProjectType::MobileApp).unwrap();
        assert_eq!(json, "\"Desarrollo App Móvil\"");
        let priority: Priority = serde_json::from_str("\"Crítico\"").unwrap();
        assert_eq!(priority, Priority::Critical);
    }

    #[test]
    fn test_from_form_clamps_negative_count() {
        let input = EstimationInput::from_form("Otro", "Medio", -4, None, None);
        assert_eq!(input.technical_requirements, 0);
    }
}
