//! Request validation.
//!
//! Turns loosely-typed request bodies into validated inputs before any state is touched, so a
//! rejected request never leaves a partial change behind.

use api_shared::{AddPatientReq, AddTransactionReq, PatchPatientReq, TransactionKind};
use biteright_types::{LooseNumber, NonEmptyText};

use crate::constants::{
    INVALID_TRANSACTION_TYPE, MISSING_PATIENT_FIELDS, MISSING_TRANSACTION_FIELDS,
};
use crate::{DashboardError, DashboardResult};

/// A transaction that passed validation and is ready to be recorded.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub category: NonEmptyText,
    pub description: NonEmptyText,
    pub amount: f64,
    pub date: NonEmptyText,
    pub patient_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: NonEmptyText,
    pub phone: NonEmptyText,
    pub treatment: NonEmptyText,
    pub amount: f64,
    pub paid: f64,
    pub emi_count: u32,
}

/// The subset of patient fields a patch may change. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct PatientChanges {
    pub name: Option<NonEmptyText>,
    pub phone: Option<NonEmptyText>,
    pub treatment: Option<NonEmptyText>,
    pub amount: Option<f64>,
    pub paid: Option<f64>,
    pub emi_count: Option<u32>,
    pub emi_paid: Option<u32>,
}

/// Zero and the empty string count as absent.
fn is_blank(value: &LooseNumber) -> bool {
    match value {
        LooseNumber::Number(n) => *n == 0.0,
        LooseNumber::Text(s) => s.is_empty(),
    }
}

fn required_text(value: Option<&str>, missing: &str) -> DashboardResult<NonEmptyText> {
    NonEmptyText::from_optional(value).map_err(|_| DashboardError::Validation(missing.into()))
}

fn required_amount<'a>(
    value: Option<&'a LooseNumber>,
    missing: &str,
) -> DashboardResult<&'a LooseNumber> {
    value
        .filter(|v| !is_blank(v))
        .ok_or_else(|| DashboardError::Validation(missing.into()))
}

fn positive_amount(field: &str, value: &LooseNumber) -> DashboardResult<f64> {
    value
        .as_f64()
        .filter(|n| *n > 0.0)
        .ok_or_else(|| DashboardError::Validation(format!("{field} must be a positive number")))
}

fn non_negative_amount(field: &str, value: &LooseNumber) -> DashboardResult<f64> {
    value
        .as_f64()
        .filter(|n| *n >= 0.0)
        .ok_or_else(|| DashboardError::Validation(format!("{field} must be a non-negative number")))
}

fn count(field: &str, value: &LooseNumber) -> DashboardResult<u32> {
    value
        .as_integer()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            DashboardError::Validation(format!("{field} must be a non-negative whole number"))
        })
}

fn optional_text(field: &str, value: Option<String>) -> DashboardResult<Option<NonEmptyText>> {
    value
        .map(|v| {
            NonEmptyText::new(v)
                .map_err(|_| DashboardError::Validation(format!("{field} cannot be empty")))
        })
        .transpose()
}

pub fn validate_new_transaction(req: AddTransactionReq) -> DashboardResult<NewTransaction> {
    let missing = MISSING_TRANSACTION_FIELDS;
    let kind = required_text(req.kind.as_deref(), missing)?;
    let category = required_text(req.category.as_deref(), missing)?;
    let description = required_text(req.description.as_deref(), missing)?;
    let amount = required_amount(req.amount.as_ref(), missing)?;
    let date = required_text(req.date.as_deref(), missing)?;

    let kind = kind
        .as_str()
        .parse::<TransactionKind>()
        .map_err(|_| DashboardError::Validation(INVALID_TRANSACTION_TYPE.into()))?;
    let amount = positive_amount("amount", amount)?;

    let patient_id = req
        .patient_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());

    Ok(NewTransaction {
        kind,
        category,
        description,
        amount,
        date,
        patient_id,
    })
}

/// Validates a new patient. `paid` and `emiCount` fall back to 0 when absent or unusable.
pub fn validate_new_patient(req: AddPatientReq) -> DashboardResult<NewPatient> {
    let missing = MISSING_PATIENT_FIELDS;
    let name = required_text(req.name.as_deref(), missing)?;
    let phone = required_text(req.phone.as_deref(), missing)?;
    let treatment = required_text(req.treatment.as_deref(), missing)?;
    let amount = required_amount(req.amount.as_ref(), missing)?;
    let amount = positive_amount("amount", amount)?;

    let paid = req
        .paid
        .as_ref()
        .and_then(LooseNumber::as_f64)
        .filter(|n| *n >= 0.0)
        .unwrap_or(0.0);
    let emi_count = req
        .emi_count
        .as_ref()
        .and_then(LooseNumber::as_integer)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0);

    Ok(NewPatient {
        name,
        phone,
        treatment,
        amount,
        paid,
        emi_count,
    })
}

pub fn validate_patient_patch(req: PatchPatientReq) -> DashboardResult<PatientChanges> {
    Ok(PatientChanges {
        name: optional_text("name", req.name)?,
        phone: optional_text("phone", req.phone)?,
        treatment: optional_text("treatment", req.treatment)?,
        amount: req
            .amount
            .as_ref()
            .map(|v| positive_amount("amount", v))
            .transpose()?,
        paid: req
            .paid
            .as_ref()
            .map(|v| non_negative_amount("paid", v))
            .transpose()?,
        emi_count: req.emi_count.as_ref().map(|v| count("emiCount", v)).transpose()?,
        emi_paid: req.emi_paid.as_ref().map(|v| count("emiPaid", v)).transpose()?,
    })
}
