use crate::core::grouping::GroupIndex;
use crate::domain::model::{Driver, GroupId, Rider};
use serde::Serialize;

/// How a group ended up, by index into the driver list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "search", rename_all = "lowercase")]
pub enum GroupPlacement {
    /// Seated with a driver that declared affinity for the group.
    Affinity { driver: usize },
    /// No affinity driver had room; seated with the first driver that did.
    Fallback { driver: usize },
    /// Nobody had room; every member went to the unassigned pool.
    Unplaced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupOutcome {
    pub group: GroupId,
    pub size: usize,
    pub placement: GroupPlacement,
}

/// Picks the driver for a whole group: affinity first, then first fit, both in input order.
pub fn select_driver(drivers: &[Driver], group: GroupId, size: usize) -> GroupPlacement {
    if let Some(driver) = drivers
        .iter()
        .position(|d| d.group_affinity == Some(group) && d.has_room_for(size))
    {
        return GroupPlacement::Affinity { driver };
    }

    drivers
        .iter()
        .position(|d| d.has_room_for(size))
        .map(|driver| GroupPlacement::Fallback { driver })
        .unwrap_or(GroupPlacement::Unplaced)
}

/// Seats each grouped bucket on a single driver or not at all.
///
/// Groups are handled in first-seen order. A group that fits nowhere is appended to
/// `unassigned` in member order and consumes no seats. The ungrouped bucket is ignored.
pub fn assign_groups(
    drivers: &mut [Driver],
    index: &GroupIndex,
    unassigned: &mut Vec<Rider>,
) -> Vec<GroupOutcome> {
    let mut outcomes = Vec::with_capacity(index.group_count());

    for (group, riders) in index.groups() {
        let size = riders.len();
        let placement = select_driver(drivers, group, size);

        match placement {
            GroupPlacement::Affinity { driver } | GroupPlacement::Fallback { driver } => {
                let driver = &mut drivers[driver];
                tracing::debug!(
                    "group {} ({} riders) -> {} ({:?})",
                    group,
                    size,
                    driver.name,
                    placement
                );
                driver.board(riders.iter().map(|r| r.name.as_str()));
            }
            GroupPlacement::Unplaced => {
                tracing::debug!("group {} ({} riders) fits no driver", group, size);
                unassigned.extend_from_slice(riders);
            }
        }

        outcomes.push(GroupOutcome {
            group,
            size,
            placement,
        });
    }

    outcomes
}
