#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// A required field is missing or a value is malformed.
    #[error("{0}")]
    Validation(String),
    /// A referenced stage, checklist item or patient does not exist.
    #[error("{0}")]
    NotFound(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DashboardError {
    pub fn stage_not_found() -> Self {
        Self::NotFound("Stage not found".into())
    }

    pub fn checklist_item_not_found() -> Self {
        Self::NotFound("Checklist item not found".into())
    }

    pub fn patient_not_found() -> Self {
        Self::NotFound("Patient not found".into())
    }
}

pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
