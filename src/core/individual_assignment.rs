use crate::domain::model::{Driver, Rider};

/// Index of the driver with free seats carrying the fewest riders.
/// Ties go to the driver listed first.
pub fn least_loaded(drivers: &[Driver]) -> Option<usize> {
    drivers
        .iter()
        .enumerate()
        .filter(|(_, d)| d.capacity > 0)
        .min_by_key(|(_, d)| d.assigned_count())
        .map(|(i, _)| i)
}

/// Seats riders one at a time on the least-loaded driver.
///
/// Returns the riders nobody could take, in their original relative order.
pub fn assign_individuals(drivers: &mut [Driver], pending: Vec<Rider>) -> Vec<Rider> {
    let mut remaining = Vec::new();

    for rider in pending {
        match least_loaded(drivers) {
            Some(i) => {
                let driver = &mut drivers[i];
                driver.board([rider.name.as_str()]);
                tracing::trace!("{} -> {}", rider.name, driver.name);
            }
            None => remaining.push(rider),
        }
    }

    if !remaining.is_empty() {
        tracing::debug!("{} riders left without a seat", remaining.len());
    }

    remaining
}
