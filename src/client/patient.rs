//! Patient, schedule, and adherence shapes exchanged with the workflows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum medication or exercise rows on a registration form.
pub const MAX_CARE_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required patient information")]
    MissingPatientInfo,

    #[error("Please enter both Patient ID and Patient Name")]
    MissingLookupFields,

    #[error("Age must be a whole number, got '{0}'")]
    InvalidAge(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl Medication {
    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.dosage.is_empty() && !self.frequency.is_empty()
    }

    /// `"{name} {dosage} - {frequency}"`
    pub fn display(&self) -> String {
        format!("{} {} - {}", self.name, self.dosage, self.frequency)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: String,
    pub timing: String,
}

impl Exercise {
    fn is_complete(&self) -> bool {
        !self.kind.is_empty() && !self.duration.is_empty() && !self.timing.is_empty()
    }

    /// `"{type} - {duration} in {timing}"`
    pub fn display(&self) -> String {
        format!("{} - {} in {}", self.kind, self.duration, self.timing)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarePlan {
    pub medications: Vec<String>,
    pub exercises: Vec<String>,
}

impl CarePlan {
    /// Format complete rows; rows with any empty field are skipped.
    pub fn from_rows(medications: &[Medication], exercises: &[Exercise]) -> Self {
        Self {
            medications: medications
                .iter()
                .filter(|m| m.is_complete())
                .map(Medication::display)
                .collect(),
            exercises: exercises
                .iter()
                .filter(|e| e.is_complete())
                .map(Exercise::display)
                .collect(),
        }
    }
}

/// Registration payload, serialized into `input_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: String,
    pub name: String,
    pub age: u32,
    pub care_plan: CarePlan,
}

/// `p_NNNN` with NNNN in 1000..=9999.
pub fn generate_patient_id() -> String {
    format!("p_{}", fastrand::u32(1000..=9999))
}

/// `"{patient_id} {patient_name}"`, the input for schedule and adherence flows.
///
/// Blank fields are rejected; otherwise both are sent exactly as entered.
pub fn lookup_input(patient_id: &str, patient_name: &str) -> Result<String, FormError> {
    if patient_id.trim().is_empty() || patient_name.trim().is_empty() {
        return Err(FormError::MissingLookupFields);
    }
    Ok(format!("{} {}", patient_id, patient_name))
}

/// Adherence analytics as the workflow reports them. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdherenceData {
    pub adherence_rate: String,
    pub non_adherence_flag: bool,
    pub follow_up_needed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdherenceLevel {
    Critical,
    Warning,
    Excellent,
}

impl AdherenceData {
    /// Integer percentage from strings like `"42%"`; 0 when unparseable.
    pub fn rate(&self) -> u32 {
        let digits: String = self
            .adherence_rate
            .replace('%', "")
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }

    pub fn level(&self) -> AdherenceLevel {
        match self.rate() {
            r if r < 50 => AdherenceLevel::Critical,
            r if r < 80 => AdherenceLevel::Warning,
            _ => AdherenceLevel::Excellent,
        }
    }
}

impl AdherenceLevel {
    pub fn message(self) -> &'static str {
        match self {
            AdherenceLevel::Critical => "Critical: Patient requires immediate attention",
            AdherenceLevel::Warning => "Warning: Patient adherence needs improvement",
            AdherenceLevel::Excellent => "Excellent: Patient showing great adherence",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub task: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleData {
    pub patient_id: String,
    pub name: String,
    pub daily_reminders: Vec<ScheduleItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_complete_rows_only() {
        let plan = CarePlan::from_rows(
            &[
                Medication {
                    name: "Metformin".into(),
                    dosage: "500mg".into(),
                    frequency: "twice daily".into(),
                },
                Medication {
                    name: "Aspirin".into(),
                    ..Default::default()
                },
            ],
            &[Exercise {
                kind: "Walking".into(),
                duration: "30 minutes".into(),
                timing: "morning".into(),
            }],
        );

        assert_eq!(plan.medications, vec!["Metformin 500mg - twice daily"]);
        assert_eq!(plan.exercises, vec!["Walking - 30 minutes in morning"]);
    }

    #[test]
    fn record_serializes_in_workflow_shape() {
        let record = PatientRecord {
            patient_id: "p_1234".into(),
            name: "Ada".into(),
            age: 67,
            care_plan: CarePlan::default(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "patient_id": "p_1234",
                "name": "Ada",
                "age": 67,
                "care_plan": {"medications": [], "exercises": []}
            })
        );
    }

    #[test]
    fn generated_ids_are_four_digits() {
        for _ in 0..100 {
            let id = generate_patient_id();
            let n: u32 = id.strip_prefix("p_").unwrap().parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn lookup_requires_both_fields() {
        assert_eq!(lookup_input("p_1", "Ada").unwrap(), "p_1 Ada");
        assert_eq!(lookup_input("p_1", "Ada Lovelace ").unwrap(), "p_1 Ada Lovelace ");
        assert_eq!(lookup_input("p_1", " "), Err(FormError::MissingLookupFields));
        assert_eq!(lookup_input("", "Ada"), Err(FormError::MissingLookupFields));
    }

    #[test]
    fn adherence_levels() {
        let data = |rate: &str| AdherenceData {
            adherence_rate: rate.into(),
            non_adherence_flag: false,
            follow_up_needed: false,
        };
        assert_eq!(data("42%").rate(), 42);
        assert_eq!(data("42%").level(), AdherenceLevel::Critical);
        assert_eq!(data("50%").level(), AdherenceLevel::Warning);
        assert_eq!(data("79%").level(), AdherenceLevel::Warning);
        assert_eq!(data("80%").level(), AdherenceLevel::Excellent);
        assert_eq!(data("n/a").rate(), 0);
        assert_eq!(data("n/a").level(), AdherenceLevel::Critical);
    }

    #[test]
    fn partial_payloads_decode() {
        let data: AdherenceData = serde_json::from_str(r#"{"adherence_rate":"42%"}"#).unwrap();
        assert_eq!(data.rate(), 42);
        assert!(!data.follow_up_needed);

        let data: ScheduleData = serde_json::from_str("{}").unwrap();
        assert!(data.daily_reminders.is_empty());
    }

    #[test]
    fn schedule_decodes_reminders() {
        let data: ScheduleData = serde_json::from_str(
            r#"{"patient_id":"p_1","name":"Ada","daily_reminders":[{"time":"08:00","task":"Metformin"}]}"#,
        )
        .unwrap();
        assert_eq!(data.daily_reminders.len(), 1);
        assert_eq!(data.daily_reminders[0].time, "08:00");
    }
}
