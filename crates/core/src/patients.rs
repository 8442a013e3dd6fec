//! Patient records and their treatment payment plans.

use api_shared::{Patient, PatientData};
use chrono::{SecondsFormat, Utc};

use crate::validation::{NewPatient, PatientChanges};
use crate::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Default)]
pub struct PatientRegistry {
    patients: Vec<Patient>,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PatientData {
        PatientData {
            patients: self.patients.clone(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.patients.iter().any(|p| p.id == id)
    }

    pub fn admit(&mut self, new: NewPatient) -> &Patient {
        let patient = Patient {
            id: crate::new_record_id(),
            name: new.name.into_string(),
            phone: new.phone.into_string(),
            treatment: new.treatment.into_string(),
            amount: new.amount,
            paid: new.paid,
            emi_count: new.emi_count,
            emi_paid: 0,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        tracing::info!("admitted patient {} for {}", patient.id, patient.treatment);

        self.patients.push(patient);
        &self.patients[self.patients.len() - 1]
    }

    /// Applies only the supplied changes; every other field keeps its value.
    pub fn update(&mut self, id: &str, changes: PatientChanges) -> DashboardResult<&Patient> {
        let patient = self
            .patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(DashboardError::patient_not_found)?;

        if let Some(name) = changes.name {
            patient.name = name.into_string();
        }
        if let Some(phone) = changes.phone {
            patient.phone = phone.into_string();
        }
        if let Some(treatment) = changes.treatment {
            patient.treatment = treatment.into_string();
        }
        if let Some(amount) = changes.amount {
            patient.amount = amount;
        }
        if let Some(paid) = changes.paid {
            patient.paid = paid;
        }
        if let Some(emi_count) = changes.emi_count {
            patient.emi_count = emi_count;
        }
        if let Some(emi_paid) = changes.emi_paid {
            patient.emi_paid = emi_paid;
        }
        tracing::info!("updated patient {}", patient.id);

        Ok(&*patient)
    }
}
