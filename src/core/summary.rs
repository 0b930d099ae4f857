use crate::domain::model::{Driver, Rider};
use serde::Serialize;

/// Totals reported after allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_capacity_used: u64,
    pub total_empty_seats: u64,
    pub total_unassigned: usize,
    pub total_assigned: usize,
    pub total_riders: usize,
    pub drivers_used: usize,
}

impl Summary {
    pub fn compute(drivers: &[Driver], unassigned: &[Rider]) -> Self {
        let used: Vec<&Driver> = drivers
            .iter()
            .filter(|d| !d.assigned_riders.is_empty())
            .collect();

        let total_assigned: usize = drivers.iter().map(Driver::assigned_count).sum();

        Self {
            total_capacity_used: used.iter().map(|d| u64::from(d.seats_used())).sum(),
            total_empty_seats: drivers.iter().map(|d| u64::from(d.capacity)).sum(),
            total_unassigned: unassigned.len(),
            total_assigned,
            total_riders: total_assigned + unassigned.len(),
            drivers_used: used.len(),
        }
    }
}
