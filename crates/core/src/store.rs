//! The process-wide dashboard state container.
//!
//! One [`DashboardStore`] is built at startup from a [`CoreConfig`] and shared by every
//! request handler. All collections sit behind a single mutex, so each operation (including
//! the checklist-to-stage cascade) runs as one uninterrupted read-modify-write. Nothing is
//! persisted; dropping the last handle discards the state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use api_shared::{
    AddPatientReq, AddTransactionReq, FinanceData, FinanceSummary, GlobalState,
    PatchPatientReq, Patient, PatientData, Stage, Transaction,
};

use crate::finances::Ledger;
use crate::patients::PatientRegistry;
use crate::stages::StageBoard;
use crate::validation::{validate_new_patient, validate_new_transaction, validate_patient_patch};
use crate::{CoreConfig, DashboardError, DashboardResult};

#[derive(Debug)]
struct Dashboard {
    board: StageBoard,
    ledger: Ledger,
    patients: PatientRegistry,
}

/// Cloneable handle to the shared dashboard state.
#[derive(Clone, Debug)]
pub struct DashboardStore {
    cfg: Arc<CoreConfig>,
    inner: Arc<Mutex<Dashboard>>,
}

impl DashboardStore {
    /// Creates a store seeded with the launch roadmap and empty ledgers.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            inner: Arc::new(Mutex::new(Dashboard {
                board: StageBoard::new(),
                ledger: Ledger::new(),
                patients: PatientRegistry::new(),
            })),
        }
    }

    // Operations validate before mutating; a poisoned guard still holds consistent data.
    fn lock(&self) -> MutexGuard<'_, Dashboard> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn global_state(&self) -> GlobalState {
        let dashboard = self.lock();
        GlobalState {
            funding: self.cfg.funding().clone(),
            targets: self.cfg.targets().clone(),
            current_stage: dashboard.board.current_stage(),
            stages: dashboard.board.stages().to_vec(),
            finances: dashboard.ledger.summary(),
        }
    }

    pub fn stages(&self) -> Vec<Stage> {
        self.lock().board.stages().to_vec()
    }

    /// Completes a stage and returns the full stage list afterwards.
    pub fn complete_stage(&self, stage_id: u32) -> DashboardResult<Vec<Stage>> {
        let mut dashboard = self.lock();
        dashboard.board.complete(stage_id)?;
        Ok(dashboard.board.stages().to_vec())
    }

    /// Toggles a checklist item and returns its stage afterwards.
    pub fn toggle_checklist_item(&self, stage_id: u32, item_id: &str) -> DashboardResult<Stage> {
        let mut dashboard = self.lock();
        dashboard.board.toggle_item(stage_id, item_id).cloned()
    }

    pub fn finances(&self) -> FinanceData {
        self.lock().ledger.snapshot()
    }

    pub fn add_transaction(
        &self,
        req: AddTransactionReq,
    ) -> DashboardResult<(Transaction, FinanceSummary)> {
        let new = validate_new_transaction(req)?;

        let mut dashboard = self.lock();
        if let Some(patient_id) = &new.patient_id {
            if !dashboard.patients.contains(patient_id) {
                return Err(DashboardError::Validation(format!(
                    "patientId does not match a patient: {patient_id}"
                )));
            }
        }
        let transaction = dashboard.ledger.record(new).clone();
        Ok((transaction, dashboard.ledger.summary()))
    }

    pub fn patients(&self) -> PatientData {
        self.lock().patients.snapshot()
    }

    pub fn has_patient(&self, id: &str) -> bool {
        self.lock().patients.contains(id)
    }

    pub fn add_patient(&self, req: AddPatientReq) -> DashboardResult<Patient> {
        let new = validate_new_patient(req)?;
        Ok(self.lock().patients.admit(new).clone())
    }

    /// Looks the patient up before validating the patch, so an unknown id is always reported
    /// as not found.
    pub fn patch_patient(&self, id: &str, req: PatchPatientReq) -> DashboardResult<Patient> {
        let mut dashboard = self.lock();
        if !dashboard.patients.contains(id) {
            return Err(DashboardError::patient_not_found());
        }
        let changes = validate_patient_patch(req)?;
        dashboard.patients.update(id, changes).cloned()
    }
}
