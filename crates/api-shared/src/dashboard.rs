//! Dashboard resources and REST bodies in their JSON wire shape.
//!
//! Field names are camelCase on the wire to match the dashboard clients.

use biteright_types::LooseNumber;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Capital raised for the clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Funding {
    pub equity: f64,
    pub loan: f64,
    pub subsidy_percent: f64,
    pub subsidy_amount: f64,
}

/// Patient volume targets shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Targets {
    pub ortho_per_month: u32,
    pub general_per_day: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItem {
    /// Stage-scoped identifier such as `"2-3"`.
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// One of the four sequential phases of setting up the clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    pub completed: bool,
    /// What has to happen before this stage opens.
    pub unlock_requirement: String,
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
}

/// Profit and loss totals derived from the full transaction list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FinanceData {
    pub transactions: Vec<Transaction>,
    pub summary: FinanceSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub treatment: String,
    pub amount: f64,
    pub paid: f64,
    pub emi_count: u32,
    pub emi_paid: u32,
    /// RFC 3339 UTC timestamp.
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientData {
    pub patients: Vec<Patient>,
}

/// Composite view returned by `GET /api/state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalState {
    pub funding: Funding,
    pub targets: Targets,
    pub current_stage: u32,
    pub stages: Vec<Stage>,
    pub finances: FinanceSummary,
}

/// Body of `POST /api/finances`.
///
/// Every field is optional on the wire so that missing values surface as validation errors
/// with a field list rather than as deserialisation failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTransactionReq {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub amount: Option<LooseNumber>,
    pub date: Option<String>,
    pub patient_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddTransactionRes {
    pub success: bool,
    pub transaction: Transaction,
    pub summary: FinanceSummary,
}

/// Body of `POST /api/patients`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddPatientReq {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub treatment: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub amount: Option<LooseNumber>,
    #[schema(value_type = Option<f64>)]
    pub paid: Option<LooseNumber>,
    #[schema(value_type = Option<u32>)]
    pub emi_count: Option<LooseNumber>,
}

/// Body of `PATCH /api/patients/{id}`.
///
/// Only the listed fields may be changed; `id` and `createdAt` are rejected as unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchPatientReq {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub treatment: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub amount: Option<LooseNumber>,
    #[schema(value_type = Option<f64>)]
    pub paid: Option<LooseNumber>,
    #[schema(value_type = Option<u32>)]
    pub emi_count: Option<LooseNumber>,
    #[schema(value_type = Option<u32>)]
    pub emi_paid: Option<LooseNumber>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientRes {
    pub success: bool,
    pub patient: Patient,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompleteStageRes {
    pub success: bool,
    pub stages: Vec<Stage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToggleChecklistRes {
    pub success: bool,
    pub stage: Stage,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_uses_type_on_the_wire() {
        let tx = Transaction {
            id: "abc".into(),
            date: "2024-01-01".into(),
            kind: TransactionKind::Expense,
            category: "rent".into(),
            description: "January rent".into(),
            amount: 25000.0,
            patient_id: None,
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "expense");
        assert!(value.get("patientId").is_none());
    }

    #[test]
    fn global_state_is_camel_case() {
        let state = GlobalState {
            funding: Funding {
                equity: 1.0,
                loan: 2.0,
                subsidy_percent: 25.0,
                subsidy_amount: 0.75,
            },
            targets: Targets {
                ortho_per_month: 1,
                general_per_day: 1,
            },
            current_stage: 1,
            stages: Vec::new(),
            finances: FinanceSummary::default(),
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["currentStage"], 1);
        assert_eq!(value["funding"]["subsidyPercent"], 25.0);
        assert_eq!(value["targets"]["orthoPerMonth"], 1);
        assert_eq!(value["finances"]["totalIncome"], 0.0);
    }

    #[test]
    fn patch_rejects_identity_fields() {
        let err = serde_json::from_str::<PatchPatientReq>(r#"{"id":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `id`"));

        let err = serde_json::from_str::<PatchPatientReq>(r#"{"createdAt":"now"}"#).unwrap_err();
        assert!(err.to_string().contains("createdAt"));
    }

    #[test]
    fn add_patient_accepts_string_amounts() {
        let req: AddPatientReq =
            serde_json::from_str(r#"{"name":"Asha","amount":"45000","emiCount":6}"#).unwrap();
        assert_eq!(req.amount, Some(LooseNumber::Text("45000".into())));
        assert_eq!(req.emi_count, Some(LooseNumber::Number(6.0)));
        assert!(req.phone.is_none());
    }

    #[test]
    fn transaction_kind_parses_only_known_values() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("refund".parse::<TransactionKind>().is_err());
    }
}
