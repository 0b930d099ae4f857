use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity shared by riders who travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for GroupId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    /// Seats still free. Only ever decreases during allocation.
    pub capacity: u32,
    pub initial_capacity: u32,
    #[serde(default)]
    pub group_affinity: Option<GroupId>,
    #[serde(default)]
    pub assigned_riders: Vec<String>,
}

impl Driver {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            initial_capacity: capacity,
            group_affinity: None,
            assigned_riders: Vec::new(),
        }
    }

    pub fn with_affinity(mut self, group: impl Into<GroupId>) -> Self {
        self.group_affinity = Some(group.into());
        self
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned_riders.len()
    }

    pub fn has_room_for(&self, seats: usize) -> bool {
        self.capacity as usize >= seats
    }

    pub fn seats_used(&self) -> u32 {
        self.initial_capacity - self.capacity
    }

    /// Share of seats taken; a driver with no seats counts as full.
    pub fn fill_ratio(&self) -> f64 {
        if self.initial_capacity == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.capacity) / f64::from(self.initial_capacity)
    }

    /// Seats every rider in order. Callers check capacity first.
    pub(crate) fn board<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            debug_assert!(self.capacity > 0, "driver {} is over capacity", self.name);
            self.assigned_riders.push(name.to_string());
            self.capacity -= 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rider {
    pub name: String,
    #[serde(default)]
    pub group: Option<GroupId>,
}

impl Rider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
        }
    }

    pub fn in_group(name: impl Into<String>, group: impl Into<GroupId>) -> Self {
        Self {
            name: name.into(),
            group: Some(group.into()),
        }
    }
}

/// Drivers and riders in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub drivers: Vec<Driver>,
    pub riders: Vec<Rider>,
}

impl Roster {
    pub fn new(drivers: Vec<Driver>, riders: Vec<Rider>) -> Self {
        Self { drivers, riders }
    }

    /// Builds a roster from JSON. Driver `capacity` starts equal to `initial_capacity`
    /// regardless of what the document says, and assignments are cleared.
    pub fn from_json(content: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct DriverEntry {
            name: String,
            capacity: u32,
            #[serde(default)]
            group: Option<GroupId>,
        }

        #[derive(Deserialize)]
        struct Document {
            drivers: Vec<DriverEntry>,
            #[serde(default)]
            riders: Vec<Rider>,
        }

        let doc: Document = serde_json::from_str(content)?;
        let drivers = doc
            .drivers
            .into_iter()
            .map(|entry| Driver {
                group_affinity: entry.group,
                ..Driver::new(entry.name, entry.capacity)
            })
            .collect();

        Ok(Self::new(drivers, doc.riders))
    }
}
