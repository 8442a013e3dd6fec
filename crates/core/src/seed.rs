//! The fixed four-stage launch roadmap the dashboard starts from.

use api_shared::{ChecklistItem, Stage};

struct StageSeed {
    name: &'static str,
    description: &'static str,
    unlock_requirement: &'static str,
    checklist: [&'static str; 3],
}

const ROADMAP: [StageSeed; 4] = [
    StageSeed {
        name: "Foundation",
        description: "Legal & Government",
        unlock_requirement: "Start",
        checklist: [
            "UDYAM Registration",
            "PMEGP Application (25% subsidy)",
            "SMC/Gumasta License",
        ],
    },
    StageSeed {
        name: "Capital & Conquest",
        description: "Financing",
        unlock_requirement: "PMEGP Application ID required",
        checklist: [
            "Bank loan approval (₹11L at 9%, 5-year)",
            "Location selection (1st floor corner shop)",
            "Rental Agreement signed",
        ],
    },
    StageSeed {
        name: "The Build-Out",
        description: "Setup",
        unlock_requirement: "Rental Agreement + Loan Approval",
        checklist: [
            "Dental chair procurement",
            "Equipment: RVG, Autoclave, Compressor",
            "Staff hiring",
        ],
    },
    StageSeed {
        name: "Mission Control",
        description: "Daily Operations",
        unlock_requirement: "All equipment installed",
        checklist: [
            "Patient management system active",
            "Daily revenue entry configured",
            "Marketing campaigns initialized",
        ],
    },
];

/// Builds the initial stage list: stage 1 unlocked, everything else locked and incomplete.
pub fn seed_stages() -> Vec<Stage> {
    ROADMAP
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| Stage {
            id,
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            unlocked: id == 1,
            completed: false,
            unlock_requirement: seed.unlock_requirement.to_string(),
            checklist: seed
                .checklist
                .iter()
                .zip(1u32..)
                .map(|(text, n)| ChecklistItem {
                    id: format!("{id}-{n}"),
                    text: text.to_string(),
                    completed: false,
                })
                .collect(),
        })
        .collect()
}
