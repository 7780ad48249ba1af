//! Capacity Range Recommender
//!
//! Computes the achievable [min, max] pool capacity per device class under a
//! RAID group-size constraint, aggregated across nodes. A capacity tier only
//! counts when it holds at least one whole RAID group; classes where no node
//! holds a full group are dropped from the answer.

use std::collections::BTreeMap;

use kube::core::DynamicObject;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::raid::RaidGroupConfig;
use super::topology::{NodeMap, TierMap, Topology};
use crate::blockdevice::{filter_eligible, BlockDevice};
use crate::error::Result;

// =============================================================================
// Capacity Range
// =============================================================================

/// Achievable pool capacity range in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityRange {
    pub min_bytes: u64,
    pub max_bytes: u64,
}

impl CapacityRange {
    /// The zero pair, meaning no recommendation is available
    pub fn is_zero(&self) -> bool {
        self.min_bytes == 0 && self.max_bytes == 0
    }
}

// =============================================================================
// Capacity Recommender
// =============================================================================

/// Range query over a device list for a fixed RAID layout
#[derive(Debug)]
pub struct CapacityRecommender {
    raid: RaidGroupConfig,
    topology: Topology,
}

impl CapacityRecommender {
    /// Build a recommender from raw device objects.
    ///
    /// Fails fast on an invalid RAID config; malformed or ineligible device
    /// records are dropped, never propagated.
    pub fn new(objects: &[DynamicObject], raid: RaidGroupConfig) -> Result<Self> {
        raid.validate()?;
        let eligible = filter_eligible(objects);
        debug!(
            eligible = eligible.len(),
            total = objects.len(),
            "built capacity recommender"
        );
        Ok(Self {
            raid,
            topology: Topology::build(&eligible),
        })
    }

    /// Build a recommender from already-inspected descriptors
    pub fn from_devices(devices: Vec<BlockDevice>, raid: RaidGroupConfig) -> Result<Self> {
        raid.validate()?;
        Ok(Self {
            raid,
            topology: Topology::build(&devices),
        })
    }

    /// Achievable range per device class.
    ///
    /// Only classes with a non-zero min and max appear; absence of any
    /// qualifying class yields an empty map, not an error.
    pub fn range_by_class(&self) -> BTreeMap<String, CapacityRange> {
        let mut ranges = BTreeMap::new();
        for (class, nodes) in self.topology.classes() {
            let range = self.class_range(nodes);
            if range.min_bytes != 0 && range.max_bytes != 0 {
                ranges.insert(class.to_string(), range);
            }
        }
        ranges
    }

    /// Overall achievable range across every qualifying device class.
    ///
    /// The zero pair means no device set anywhere can form a full RAID group.
    pub fn range(&self) -> CapacityRange {
        let mut overall = CapacityRange::default();
        for range in self.range_by_class().values() {
            if overall.is_zero() {
                overall = *range;
            } else {
                overall.min_bytes = overall.min_bytes.min(range.min_bytes);
                overall.max_bytes = overall.max_bytes.max(range.max_bytes);
            }
        }
        overall
    }

    /// Min/max across one class's nodes
    fn class_range(&self, nodes: &NodeMap) -> CapacityRange {
        let mut class_min = 0u64;
        let mut class_max = 0u64;

        for tiers in nodes.values() {
            let (node_min, node_max) = self.node_range(tiers);
            if node_min == 0 || node_max == 0 {
                continue;
            }
            class_min = if class_min == 0 {
                node_min
            } else {
                class_min.min(node_min)
            };
            class_max = class_max.max(node_max);
        }

        CapacityRange {
            min_bytes: class_min,
            max_bytes: class_max,
        }
    }

    /// Min/max for one node's capacity tiers.
    ///
    /// A tier qualifies when it holds at least one whole RAID group. The
    /// minimum uses a single group at the smallest qualifying tier; the
    /// maximum uses every whole group at the richest tier.
    fn node_range(&self, tiers: &TierMap) -> (u64, u64) {
        let group = self.raid.group_device_count;
        let data = self.raid.data_device_count();
        let mut node_min = 0u64;
        let mut node_max = 0u64;

        for (&tier_capacity, devices) in tiers {
            let count = devices.len() as u64;
            if count < group {
                continue;
            }
            let raid_groups = count / group;
            let tier_min = tier_capacity * data;
            let tier_max = tier_capacity * raid_groups * data;

            node_min = if node_min == 0 {
                tier_min
            } else {
                node_min.min(tier_min)
            };
            node_max = node_max.max(tier_max);
        }

        (node_min, node_max)
    }
}
