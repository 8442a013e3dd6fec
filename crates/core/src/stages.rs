//! Stage progression rules.
//!
//! A stage moves `Locked -> Unlocked -> Completed` and never back. Completing stage N unlocks
//! stage N+1 and makes it the current stage; the last stage has nothing to unlock.

use crate::constants::FIRST_STAGE_ID;
use crate::seed::seed_stages;
use crate::{DashboardError, DashboardResult};
use api_shared::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Locked,
    Unlocked,
    Completed,
}

impl StageStatus {
    pub fn of(stage: &Stage) -> Self {
        if stage.completed {
            StageStatus::Completed
        } else if stage.unlocked {
            StageStatus::Unlocked
        } else {
            StageStatus::Locked
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StageStatus::Locked => "locked",
            StageStatus::Unlocked => "unlocked",
            StageStatus::Completed => "completed",
        }
    }
}

/// The ordered stage list plus the pointer to the stage currently being worked on.
#[derive(Debug, Clone)]
pub struct StageBoard {
    stages: Vec<Stage>,
    current_stage: u32,
}

impl StageBoard {
    pub fn new() -> Self {
        Self {
            stages: seed_stages(),
            current_stage: FIRST_STAGE_ID,
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn current_stage(&self) -> u32 {
        self.current_stage
    }

    /// Marks a stage completed regardless of its checklist and unlocks the next one.
    ///
    /// Repeating the call is harmless.
    pub fn complete(&mut self, stage_id: u32) -> DashboardResult<()> {
        let index = self.index_of(stage_id)?;
        self.complete_at(index);
        Ok(())
    }

    /// Flips one checklist item.
    ///
    /// When the flip leaves every item of a not-yet-completed stage done, the stage completes
    /// with the same cascade as [`StageBoard::complete`]. Unchecking an item afterwards leaves
    /// the stage completed.
    pub fn toggle_item(&mut self, stage_id: u32, item_id: &str) -> DashboardResult<&Stage> {
        let index = self.index_of(stage_id)?;
        let stage = &mut self.stages[index];

        let item = stage
            .checklist
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(DashboardError::checklist_item_not_found)?;
        item.completed = !item.completed;
        tracing::debug!(stage_id, item_id, completed = item.completed, "checklist item toggled");

        let all_done = stage.checklist.iter().all(|item| item.completed);
        if all_done && !stage.completed {
            self.complete_at(index);
        }

        Ok(&self.stages[index])
    }

    fn index_of(&self, stage_id: u32) -> DashboardResult<usize> {
        self.stages
            .iter()
            .position(|s| s.id == stage_id)
            .ok_or_else(DashboardError::stage_not_found)
    }

    fn complete_at(&mut self, index: usize) {
        let stage = &mut self.stages[index];
        stage.completed = true;
        let next_id = stage.id.saturating_add(1);
        tracing::info!("stage {} ({}) completed", stage.id, stage.name);

        if let Some(next) = self.stages.iter_mut().find(|s| s.id == next_id) {
            next.unlocked = true;
            self.current_stage = next.id;
            tracing::info!("stage {} ({}) unlocked", next.id, next.name);
        }
    }
}

impl Default for StageBoard {
    fn default() -> Self {
        Self::new()
    }
}
