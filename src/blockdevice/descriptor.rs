//! Block Device Descriptor
//!
//! Fully-typed view of one block-device record. Descriptors are built fresh
//! per recommendation call and never mutated after construction.

use serde::{Deserialize, Serialize};

// =============================================================================
// Device Reference
// =============================================================================

/// Identity of a block-device object, for callers to re-resolve into a live
/// API object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRef {
    pub kind: String,
    pub api_version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

// =============================================================================
// Device States
// =============================================================================

/// Device lifecycle state reported by the device manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceState {
    Active,
    Inactive,
    Unknown,
}

impl DeviceState {
    /// Parse the CR state string; unrecognized values map to `Unknown`
    pub fn parse(s: &str) -> Self {
        match s {
            "Active" => DeviceState::Active,
            "Inactive" => DeviceState::Inactive,
            _ => DeviceState::Unknown,
        }
    }
}

/// Claim state of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimState {
    Unclaimed,
    Claimed,
    Released,
}

// =============================================================================
// Drive Type
// =============================================================================

/// Drive media type classification
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DriveType {
    #[serde(rename = "HDD")]
    Hdd,
    #[serde(rename = "SSD")]
    Ssd,
    Unknown,
}

impl DriveType {
    /// Classify the CR drive-type label; unrecognized values map to `Unknown`
    pub fn from_label(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "HDD" => DriveType::Hdd,
            "SSD" => DriveType::Ssd,
            _ => DriveType::Unknown,
        }
    }
}

impl std::fmt::Display for DriveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriveType::Hdd => write!(f, "HDD"),
            DriveType::Ssd => write!(f, "SSD"),
            DriveType::Unknown => write!(f, "Unknown"),
        }
    }
}

// =============================================================================
// Block Device
// =============================================================================

/// Typed descriptor derived from one raw block-device object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDevice {
    /// Object identity for re-resolution
    pub reference: DeviceRef,
    /// Node the device is attached to
    pub node_name: String,
    /// Value of the kubernetes.io/hostname label
    pub host_label: String,
    /// Usable capacity in bytes
    pub capacity_bytes: u64,
    /// Physical sector size in bytes, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_sector_size: Option<u64>,
    /// Logical sector size in bytes, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_sector_size: Option<u64>,
    /// Coarse device kind reported by the device manager (disk, partition, ...)
    pub device_type: String,
    /// Drive media type
    pub drive_type: DriveType,
    /// Lifecycle state
    pub state: DeviceState,
    /// Claim state
    pub claim_state: ClaimState,
    /// Whether a filesystem is already present on the device
    pub has_filesystem: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_state_parse() {
        assert_eq!(DeviceState::parse("Active"), DeviceState::Active);
        assert_eq!(DeviceState::parse("Inactive"), DeviceState::Inactive);
        assert_eq!(DeviceState::parse("Degraded"), DeviceState::Unknown);
        assert_eq!(DeviceState::parse(""), DeviceState::Unknown);
    }

    #[test]
    fn test_drive_type_from_label() {
        assert_eq!(DriveType::from_label("HDD"), DriveType::Hdd);
        assert_eq!(DriveType::from_label("hdd"), DriveType::Hdd);
        assert_eq!(DriveType::from_label("SSD"), DriveType::Ssd);
        assert_eq!(DriveType::from_label("tape"), DriveType::Unknown);
    }

    #[test]
    fn test_drive_type_display() {
        assert_eq!(format!("{}", DriveType::Hdd), "HDD");
        assert_eq!(format!("{}", DriveType::Ssd), "SSD");
        assert_eq!(format!("{}", DriveType::Unknown), "Unknown");
    }
}
