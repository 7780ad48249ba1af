//! Device Topology Index
//!
//! Partitions eligible devices into a two-level index:
//! device class → node → capacity tier → ordered device list. Every device
//! is indexed under its coarse class (drive type) and, when it reports a
//! physical sector size, under a finer class carrying that size, so callers
//! can query at either granularity from one grouping pass.

use std::collections::BTreeMap;

use crate::blockdevice::{BlockDevice, DriveType};

// =============================================================================
// Device Class
// =============================================================================

/// Grouping key: drive type plus optional physical-sector-size refinement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceClass {
    pub drive_type: DriveType,
    pub sector_size: Option<u64>,
}

impl DeviceClass {
    /// Coarse class for a drive type
    pub fn coarse(drive_type: DriveType) -> Self {
        Self {
            drive_type,
            sector_size: None,
        }
    }

    /// Fine class for a drive type with a physical sector size
    pub fn fine(drive_type: DriveType, sector_size: u64) -> Self {
        Self {
            drive_type,
            sector_size: Some(sector_size),
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sector_size {
            Some(size) => write!(f, "{}-{}", self.drive_type, size),
            None => write!(f, "{}", self.drive_type),
        }
    }
}

// =============================================================================
// Topology
// =============================================================================

/// Ordered device lists keyed by capacity tier; tier keys iterate ascending
pub type TierMap = BTreeMap<u64, Vec<BlockDevice>>;

/// Per-node tier maps
pub type NodeMap = BTreeMap<String, TierMap>;

/// Two-level device index built fresh per recommendation call
#[derive(Debug, Default)]
pub struct Topology {
    classes: BTreeMap<DeviceClass, NodeMap>,
}

impl Topology {
    /// Build the index from an eligible device list.
    ///
    /// Devices keep their input order within each tier bucket; that order
    /// decides which devices an allocation picks first.
    pub fn build(devices: &[BlockDevice]) -> Self {
        let mut topology = Self::default();
        for device in devices {
            topology.insert(DeviceClass::coarse(device.drive_type), device);
            if let Some(sector_size) = device.physical_sector_size {
                if sector_size != 0 {
                    topology.insert(DeviceClass::fine(device.drive_type, sector_size), device);
                }
            }
        }
        topology
    }

    fn insert(&mut self, class: DeviceClass, device: &BlockDevice) {
        self.classes
            .entry(class)
            .or_default()
            .entry(device.node_name.clone())
            .or_default()
            .entry(device.capacity_bytes)
            .or_default()
            .push(device.clone());
    }

    /// Iterate classes and their per-node tier maps, in class order
    pub fn classes(&self) -> impl Iterator<Item = (&DeviceClass, &NodeMap)> {
        self.classes.iter()
    }

    /// Per-node tier map for one class
    pub fn class(&self, class: &DeviceClass) -> Option<&NodeMap> {
        self.classes.get(class)
    }

    /// Whether the index holds no devices
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
