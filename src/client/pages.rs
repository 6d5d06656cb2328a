//! Page flows: collect input, call the relay, interpret the result.
//!
//! Every failure is collapsed into one user-facing message per page; the
//! underlying error is kept for logging.

use serde_json::Value;
use thiserror::Error;

use crate::client::api::{ApiClient, ApiError};
use crate::client::patient::{
    generate_patient_id, lookup_input, AdherenceData, CarePlan, Exercise, FormError, Medication,
    PatientRecord, ScheduleData, MAX_CARE_ROWS,
};
use crate::client::unwrap::{unwrap_result, UnwrapError};
use crate::relay::{RelayKind, RelayRequest};

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Unwrap(#[from] UnwrapError),
}

impl PageError {
    /// Message shown to the user. Form errors are shown as-is; everything else
    /// becomes the page's generic failure.
    pub fn user_message(&self, kind: RelayKind) -> String {
        match self {
            PageError::Form(e) => e.to_string(),
            _ => match kind {
                RelayKind::Registration => "Failed to register patient. Please try again.",
                RelayKind::Scheduling => "Failed to generate schedule. Please try again.",
                RelayKind::Adherence => "Failed to fetch adherence data. Please try again.",
            }
            .to_string(),
        }
    }
}

/// Registration form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub patient_id: String,
    pub name: String,
    pub age: String,
    pub medications: Vec<Medication>,
    pub exercises: Vec<Exercise>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    /// Fresh form with a generated patient ID and one empty row of each kind.
    pub fn new() -> Self {
        Self {
            patient_id: generate_patient_id(),
            name: String::new(),
            age: String::new(),
            medications: vec![Medication::default()],
            exercises: vec![Exercise::default()],
        }
    }

    /// Returns false when the form already holds the maximum number of rows.
    pub fn add_medication(&mut self, medication: Medication) -> bool {
        if self.medications.len() >= MAX_CARE_ROWS {
            return false;
        }
        self.medications.push(medication);
        true
    }

    pub fn add_exercise(&mut self, exercise: Exercise) -> bool {
        if self.exercises.len() >= MAX_CARE_ROWS {
            return false;
        }
        self.exercises.push(exercise);
        true
    }

    pub fn remove_medication(&mut self, index: usize) {
        if index < self.medications.len() {
            self.medications.remove(index);
        }
    }

    pub fn remove_exercise(&mut self, index: usize) {
        if index < self.exercises.len() {
            self.exercises.remove(index);
        }
    }

    pub fn to_record(&self) -> Result<PatientRecord, FormError> {
        let name = self.name.trim();
        let age = self.age.trim();
        if name.is_empty() || age.is_empty() {
            return Err(FormError::MissingPatientInfo);
        }
        let age = age
            .parse()
            .map_err(|_| FormError::InvalidAge(age.to_string()))?;

        Ok(PatientRecord {
            patient_id: self.patient_id.clone(),
            name: name.to_string(),
            age,
            care_plan: CarePlan::from_rows(&self.medications, &self.exercises),
        })
    }
}

/// Register a patient. The workflow's JSON answer is returned untouched.
pub async fn register(client: &ApiClient, form: &RegistrationForm) -> Result<(PatientRecord, Value), PageError> {
    let record = form.to_record()?;
    let input_value = serde_json::to_string(&record).map_err(ApiError::from)?;
    let request = RelayRequest {
        input_value: Some(input_value),
        output_type: Some("chat".to_string()),
        input_type: Some("text".to_string()),
    };

    let response = client.relay(RelayKind::Registration, &request).await?;
    Ok((record, response))
}

pub async fn schedule(client: &ApiClient, patient_id: &str, patient_name: &str) -> Result<ScheduleData, PageError> {
    lookup(client, RelayKind::Scheduling, patient_id, patient_name).await
}

pub async fn adherence(client: &ApiClient, patient_id: &str, patient_name: &str) -> Result<AdherenceData, PageError> {
    lookup(client, RelayKind::Adherence, patient_id, patient_name).await
}

async fn lookup<T: serde::de::DeserializeOwned>(
    client: &ApiClient,
    kind: RelayKind,
    patient_id: &str,
    patient_name: &str,
) -> Result<T, PageError> {
    let request = RelayRequest {
        input_value: Some(lookup_input(patient_id, patient_name)?),
        output_type: Some("text".to_string()),
        input_type: Some("text".to_string()),
    };

    let response = client.relay(kind, &request).await?;
    Ok(unwrap_result(&response)?)
}
