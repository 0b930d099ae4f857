use crate::domain::model::{GroupId, Rider};
use indexmap::IndexMap;

/// Riders bucketed by group identity.
///
/// Buckets iterate in the order their identity first appeared in the input, and
/// riders inside a bucket keep input order. Ungrouped riders share the `None` bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupIndex {
    buckets: IndexMap<Option<GroupId>, Vec<Rider>>,
}

impl GroupIndex {
    pub fn from_riders(riders: &[Rider]) -> Self {
        let mut buckets: IndexMap<Option<GroupId>, Vec<Rider>> = IndexMap::new();
        for rider in riders {
            buckets.entry(rider.group).or_default().push(rider.clone());
        }
        Self { buckets }
    }

    /// Every bucket, `None` included, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Option<GroupId>, &[Rider])> {
        self.buckets
            .iter()
            .map(|(group, riders)| (*group, riders.as_slice()))
    }

    /// Only the real groups, in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &[Rider])> {
        self.iter()
            .filter_map(|(group, riders)| group.map(|id| (id, riders)))
    }

    pub fn ungrouped(&self) -> &[Rider] {
        self.buckets
            .get(&None)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn group_count(&self) -> usize {
        self.groups().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
