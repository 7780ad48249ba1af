//! Device Allocator
//!
//! Turns a requested pool capacity into a concrete device selection. Per
//! node, capacity tiers are visited in ascending order and the smallest tier
//! able to satisfy the request with whole RAID groups wins; the resulting
//! capacity may exceed the request due to whole-group rounding, never fall
//! short of it.

use std::collections::BTreeMap;

use kube::core::DynamicObject;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::raid::RaidGroupConfig;
use super::topology::{TierMap, Topology};
use crate::blockdevice::{filter_eligible, BlockDevice, DeviceRef};
use crate::error::{Error, Result};

// =============================================================================
// Allocation Records
// =============================================================================

/// One node's contribution to an allocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInstance {
    /// Node the devices live on
    pub node: String,
    /// Achievable capacity of the selected devices in bytes
    pub capacity_bytes: u64,
    /// Identities of the selected devices, in selection order
    pub data_device_refs: Vec<DeviceRef>,
}

/// Allocation for one device class
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAllocation {
    /// Capacity the caller asked for, in bytes
    pub requested_bytes: u64,
    /// RAID layout the allocation was computed under
    pub raid: RaidGroupConfig,
    /// Per-node selections, one per contributing node
    pub instances: Vec<PoolInstance>,
}

// =============================================================================
// Device Allocator
// =============================================================================

/// Concrete allocation query for one requested capacity
#[derive(Debug)]
pub struct DeviceAllocator {
    raid: RaidGroupConfig,
    requested_bytes: u64,
    topology: Topology,
}

impl DeviceAllocator {
    /// Build an allocator from raw device objects.
    ///
    /// Fails fast on a zero requested capacity or an invalid RAID config;
    /// malformed or ineligible device records are dropped, never propagated.
    pub fn new(
        objects: &[DynamicObject],
        raid: RaidGroupConfig,
        requested_bytes: u64,
    ) -> Result<Self> {
        raid.validate()?;
        if requested_bytes == 0 {
            return Err(Error::ZeroCapacityRequest);
        }
        let eligible = filter_eligible(objects);
        Ok(Self {
            raid,
            requested_bytes,
            topology: Topology::build(&eligible),
        })
    }

    /// Build an allocator from already-inspected descriptors
    pub fn from_devices(
        devices: Vec<BlockDevice>,
        raid: RaidGroupConfig,
        requested_bytes: u64,
    ) -> Result<Self> {
        raid.validate()?;
        if requested_bytes == 0 {
            return Err(Error::ZeroCapacityRequest);
        }
        Ok(Self {
            raid,
            requested_bytes,
            topology: Topology::build(&devices),
        })
    }

    /// Compute the allocation, keyed by device class name.
    ///
    /// Never errors once the allocator is constructed; a class appears only
    /// if at least one of its nodes produced a selection, so an infeasible
    /// request yields an empty map.
    pub fn allocate(&self) -> BTreeMap<String, ClassAllocation> {
        let mut allocations = BTreeMap::new();

        for (class, nodes) in self.topology.classes() {
            let instances: Vec<PoolInstance> = nodes
                .iter()
                .filter_map(|(node, tiers)| self.allocate_on_node(node, tiers))
                .collect();

            if instances.is_empty() {
                continue;
            }
            debug!(
                class = %class,
                nodes = instances.len(),
                "allocation found"
            );
            allocations.insert(
                class.to_string(),
                ClassAllocation {
                    requested_bytes: self.requested_bytes,
                    raid: self.raid,
                    instances,
                },
            );
        }

        allocations
    }

    /// Pick devices from the smallest capacity tier on one node able to
    /// satisfy the request with whole RAID groups.
    ///
    /// Tiers ascend, so the first sufficient tier is the smallest; scanning
    /// stops there. Tiers without a full group, and tiers whose every group
    /// combined still falls short of the request, are skipped.
    fn allocate_on_node(&self, node: &str, tiers: &TierMap) -> Option<PoolInstance> {
        let group = self.raid.group_device_count;
        let data = self.raid.data_device_count();

        for (&tier_capacity, devices) in tiers {
            let count = devices.len() as u64;
            if count < group {
                continue;
            }
            let raid_groups = count / group;
            let tier_max = tier_capacity * raid_groups * data;
            if tier_max < self.requested_bytes {
                continue;
            }

            let needed_groups = self.requested_bytes.div_ceil(tier_capacity * data);
            let selected = (needed_groups * group) as usize;
            let refs: Vec<DeviceRef> = devices
                .iter()
                .take(selected)
                .map(|device| device.reference.clone())
                .collect();

            return Some(PoolInstance {
                node: node.to_string(),
                capacity_bytes: needed_groups * data * tier_capacity,
                data_device_refs: refs,
            });
        }

        None
    }
}
