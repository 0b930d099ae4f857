use proptest::prelude::*;
use ride_alloc::core::group_assignment::GroupPlacement;
use ride_alloc::{
    allocate, allocate_with, Allocation, Driver, FailedGroupPolicy, GroupId, Rider, Roster,
};
use std::collections::HashMap;

fn roster_strategy() -> impl Strategy<Value = Roster> {
    let drivers = prop::collection::vec((0u32..5, prop::option::of(0i64..4)), 0..6);
    let riders = prop::collection::vec(prop::option::of(0i64..4), 0..20);

    (drivers, riders).prop_map(|(drivers, riders)| {
        let drivers = drivers
            .into_iter()
            .enumerate()
            .map(|(i, (capacity, affinity))| Driver {
                group_affinity: affinity.map(GroupId),
                ..Driver::new(format!("d{i}"), capacity)
            })
            .collect();
        let riders = riders
            .into_iter()
            .enumerate()
            .map(|(i, group)| Rider {
                name: format!("r{i}"),
                group: group.map(GroupId),
            })
            .collect();
        Roster::new(drivers, riders)
    })
}

fn placements(allocation: &Allocation) -> HashMap<&str, Option<&str>> {
    let mut seen = HashMap::new();
    for driver in &allocation.drivers {
        for rider in &driver.assigned_riders {
            assert!(seen.insert(rider.as_str(), Some(driver.name.as_str())).is_none());
        }
    }
    for rider in &allocation.unassigned {
        assert!(seen.insert(rider.name.as_str(), None).is_none());
    }
    seen
}

proptest! {
    #[test]
    fn every_rider_placed_exactly_once(roster in roster_strategy()) {
        let riders = roster.riders.clone();
        let allocation = allocate(roster);
        let seen = placements(&allocation);

        prop_assert_eq!(seen.len(), riders.len());
        for rider in &riders {
            prop_assert!(seen.contains_key(rider.name.as_str()));
        }
    }

    #[test]
    fn seats_are_conserved(roster in roster_strategy()) {
        let total_riders = roster.riders.len();
        let initial: u64 = roster.drivers.iter().map(|d| u64::from(d.capacity)).sum();
        let allocation = allocate(roster);

        let remaining: u64 = allocation.drivers.iter().map(|d| u64::from(d.capacity)).sum();
        let assigned: usize = allocation.drivers.iter().map(|d| d.assigned_riders.len()).sum();

        prop_assert_eq!(initial - remaining, assigned as u64);
        prop_assert_eq!(assigned + allocation.unassigned.len(), total_riders);
        prop_assert_eq!(allocation.summary.total_capacity_used, assigned as u64);
        prop_assert_eq!(allocation.summary.total_empty_seats, remaining);
        prop_assert_eq!(allocation.summary.total_riders, total_riders);

        for driver in &allocation.drivers {
            prop_assert!(driver.assigned_riders.len() <= driver.initial_capacity as usize);
            prop_assert!(driver.capacity <= driver.initial_capacity);
        }
    }

    #[test]
    fn placed_groups_share_one_driver(roster in roster_strategy()) {
        let riders = roster.riders.clone();
        let mut drivers_by_group: HashMap<GroupId, Vec<Option<String>>> = HashMap::new();
        let allocation = allocate(roster);
        let seen = placements(&allocation);

        for rider in riders.iter() {
            if let Some(group) = rider.group {
                let placed = seen[rider.name.as_str()].map(str::to_string);
                drivers_by_group.entry(group).or_default().push(placed);
            }
        }

        for outcome in &allocation.group_outcomes {
            let members = &drivers_by_group[&outcome.group];
            prop_assert_eq!(members.len(), outcome.size);
            if let GroupPlacement::Affinity { driver } | GroupPlacement::Fallback { driver } =
                outcome.placement
            {
                let name = &allocation.drivers[driver].name;
                for member in members {
                    prop_assert_eq!(member.as_deref(), Some(name.as_str()));
                }
            }
        }
    }

    #[test]
    fn groups_stay_whole_when_left_unassigned(roster in roster_strategy()) {
        let riders = roster.riders.clone();
        let allocation = allocate_with(roster, FailedGroupPolicy::LeaveUnassigned);
        let seen = placements(&allocation);

        let mut by_group: HashMap<GroupId, Vec<Option<&str>>> = HashMap::new();
        for rider in &riders {
            if let Some(group) = rider.group {
                by_group.entry(group).or_default().push(seen[rider.name.as_str()]);
            }
        }

        for members in by_group.values() {
            prop_assert!(members.iter().all(|m| *m == members[0]));
        }
    }

    #[test]
    fn allocation_is_deterministic(roster in roster_strategy()) {
        prop_assert_eq!(allocate(roster.clone()), allocate(roster));
    }
}
