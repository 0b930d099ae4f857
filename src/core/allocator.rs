use crate::core::group_assignment::{assign_groups, GroupOutcome, GroupPlacement};
use crate::core::grouping::GroupIndex;
use crate::core::individual_assignment::assign_individuals;
use crate::core::summary::Summary;
use crate::domain::model::{Driver, Rider, Roster};
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Final state of a run: every rider sits in exactly one driver list or in `unassigned`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    pub drivers: Vec<Driver>,
    pub unassigned: Vec<Rider>,
    pub group_outcomes: Vec<GroupOutcome>,
    pub summary: Summary,
}

impl Allocation {
    /// Name of the driver carrying `rider`, if any.
    pub fn assignment_of(&self, rider: &str) -> Option<&str> {
        self.drivers
            .iter()
            .find(|d| d.assigned_riders.iter().any(|r| r == rider))
            .map(|d| d.name.as_str())
    }

    pub fn is_unassigned(&self, rider: &str) -> bool {
        self.unassigned.iter().any(|r| r.name == rider)
    }
}

/// What happens to members of a group that no single driver could take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum FailedGroupPolicy {
    /// Members join the individual pass after the ungrouped riders and may be seated apart.
    #[default]
    PackIndividually,
    /// Members stay together in the unassigned pool.
    LeaveUnassigned,
}

/// Runs the allocation stages over a roster with the default policy.
pub fn allocate(roster: Roster) -> Allocation {
    allocate_with(roster, FailedGroupPolicy::default())
}

/// Runs the allocation stages over a roster.
///
/// Groups go first so they can claim whole vehicles; ungrouped riders, then members
/// of groups that fit nowhere, are packed afterwards one seat at a time.
pub fn allocate_with(roster: Roster, policy: FailedGroupPolicy) -> Allocation {
    let Roster {
        mut drivers,
        riders,
    } = roster;

    let index = GroupIndex::from_riders(&riders);
    tracing::debug!(
        "indexed {} riders into {} groups ({} ungrouped)",
        riders.len(),
        index.group_count(),
        index.ungrouped().len()
    );

    let mut pending = index.ungrouped().to_vec();
    let mut failed = Vec::new();
    let group_outcomes = assign_groups(&mut drivers, &index, &mut failed);

    let unplaced = group_outcomes
        .iter()
        .filter(|o| o.placement == GroupPlacement::Unplaced)
        .count();
    tracing::debug!(
        "group pass placed {} of {} groups; {} grouped riders left over",
        group_outcomes.len() - unplaced,
        group_outcomes.len(),
        failed.len()
    );

    let unassigned = match policy {
        FailedGroupPolicy::PackIndividually => {
            pending.append(&mut failed);
            assign_individuals(&mut drivers, pending)
        }
        FailedGroupPolicy::LeaveUnassigned => {
            let mut unassigned = assign_individuals(&mut drivers, pending);
            unassigned.append(&mut failed);
            unassigned
        }
    };
    let summary = Summary::compute(&drivers, &unassigned);

    tracing::info!(
        "allocated {} of {} riders across {} drivers ({} unassigned)",
        summary.total_assigned,
        summary.total_riders,
        summary.drivers_used,
        summary.total_unassigned
    );

    Allocation {
        drivers,
        unassigned,
        group_outcomes,
        summary,
    }
}

pub struct AllocationEngine<S: RosterSource> {
    source: S,
    policy: FailedGroupPolicy,
}

impl<S: RosterSource> AllocationEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: FailedGroupPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailedGroupPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn run(&self) -> Result<Allocation> {
        let roster = self.source.load_roster()?;
        tracing::debug!(
            "loaded {} drivers and {} riders",
            roster.drivers.len(),
            roster.riders.len()
        );
        Ok(allocate_with(roster, self.policy))
    }
}
