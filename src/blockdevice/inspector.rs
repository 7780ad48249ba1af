//! Block Device Inspector
//!
//! Extracts typed fields from a raw block-device object. Each accessor fails
//! distinctly: `KindMismatch` when the object is not a block device,
//! `FieldNotFound` when a path is absent, `TypeMismatch` when the value has
//! the wrong underlying type. Accessors are pure reads with no side effects.

use kube::core::DynamicObject;

use super::descriptor::{BlockDevice, ClaimState, DeviceRef, DeviceState, DriveType};
use crate::error::{Error, Result};
use crate::unstruct::{bytes_at, string_at};

// =============================================================================
// Field Paths
// =============================================================================

/// Expected object kind
pub const BLOCK_DEVICE_KIND: &str = "BlockDevice";

pub const CAPACITY_FIELD: &str = "spec.capacity.storage";
pub const PHYSICAL_SECTOR_FIELD: &str = "spec.capacity.physicalSectorSize";
pub const LOGICAL_SECTOR_FIELD: &str = "spec.capacity.logicalSectorSize";
pub const DEVICE_TYPE_FIELD: &str = "spec.details.deviceType";
pub const DRIVE_TYPE_FIELD: &str = "spec.details.driveType";
pub const NODE_NAME_FIELD: &str = "spec.nodeAttributes.nodeName";
pub const STATE_FIELD: &str = "status.state";
pub const CLAIM_STATE_FIELD: &str = "status.claimState";
pub const FS_TYPE_FIELD: &str = "spec.filesystem.fsType";

/// Node label carrying the host name
pub const HOSTNAME_LABEL: &str = "kubernetes.io/hostname";

// =============================================================================
// Accessors
// =============================================================================

/// Verify the object's declared kind is the block-device kind
pub fn verify_kind(obj: &DynamicObject) -> Result<()> {
    let found = obj
        .types
        .as_ref()
        .map(|t| t.kind.as_str())
        .unwrap_or("<none>");
    if found == BLOCK_DEVICE_KIND {
        Ok(())
    } else {
        Err(Error::KindMismatch {
            expected: BLOCK_DEVICE_KIND.to_string(),
            found: found.to_string(),
        })
    }
}

/// Build the identity reference for a device object
pub fn device_ref(obj: &DynamicObject) -> Result<DeviceRef> {
    let name = obj
        .metadata
        .name
        .clone()
        .ok_or_else(|| Error::FieldNotFound {
            path: "metadata.name".to_string(),
        })?;
    let (kind, api_version) = obj
        .types
        .as_ref()
        .map(|t| (t.kind.clone(), t.api_version.clone()))
        .unwrap_or_default();

    Ok(DeviceRef {
        kind,
        api_version,
        name,
        namespace: obj.metadata.namespace.clone(),
        uid: obj.metadata.uid.clone(),
    })
}

/// Node the device is attached to
pub fn node_name(obj: &DynamicObject) -> Result<String> {
    string_at(&obj.data, NODE_NAME_FIELD)
}

/// Value of the kubernetes.io/hostname label
pub fn host_label(obj: &DynamicObject) -> Result<String> {
    obj.metadata
        .labels
        .as_ref()
        .and_then(|labels| labels.get(HOSTNAME_LABEL))
        .cloned()
        .ok_or_else(|| Error::FieldNotFound {
            path: format!("metadata.labels[{}]", HOSTNAME_LABEL),
        })
}

/// Device capacity in bytes
pub fn capacity_bytes(obj: &DynamicObject) -> Result<u64> {
    bytes_at(&obj.data, CAPACITY_FIELD)
}

/// Physical sector size in bytes; absent field reads as `None`
pub fn physical_sector_size(obj: &DynamicObject) -> Result<Option<u64>> {
    optional(bytes_at(&obj.data, PHYSICAL_SECTOR_FIELD))
}

/// Logical sector size in bytes; absent field reads as `None`
pub fn logical_sector_size(obj: &DynamicObject) -> Result<Option<u64>> {
    optional(bytes_at(&obj.data, LOGICAL_SECTOR_FIELD))
}

/// Coarse device kind reported by the device manager
pub fn device_type(obj: &DynamicObject) -> Result<String> {
    string_at(&obj.data, DEVICE_TYPE_FIELD)
}

/// Drive media type; absent or unrecognized values read as `Unknown`
pub fn drive_type(obj: &DynamicObject) -> Result<DriveType> {
    match optional(string_at(&obj.data, DRIVE_TYPE_FIELD))? {
        Some(label) => Ok(DriveType::from_label(&label)),
        None => Ok(DriveType::Unknown),
    }
}

/// Device lifecycle state; unrecognized values read as `Unknown`
pub fn state(obj: &DynamicObject) -> Result<DeviceState> {
    let s = string_at(&obj.data, STATE_FIELD)?;
    Ok(DeviceState::parse(&s))
}

/// Device claim state
pub fn claim_state(obj: &DynamicObject) -> Result<ClaimState> {
    let s = string_at(&obj.data, CLAIM_STATE_FIELD)?;
    match s.as_str() {
        "Unclaimed" => Ok(ClaimState::Unclaimed),
        "Claimed" => Ok(ClaimState::Claimed),
        "Released" => Ok(ClaimState::Released),
        _ => Err(Error::TypeMismatch {
            path: CLAIM_STATE_FIELD.to_string(),
            expected: "Unclaimed, Claimed or Released",
            found: s,
        }),
    }
}

/// Whether a filesystem is already present on the device
pub fn has_filesystem(obj: &DynamicObject) -> Result<bool> {
    Ok(optional(string_at(&obj.data, FS_TYPE_FIELD))?
        .is_some_and(|fs_type| !fs_type.is_empty()))
}

/// Build the full typed descriptor from one raw object
pub fn inspect(obj: &DynamicObject) -> Result<BlockDevice> {
    verify_kind(obj)?;

    Ok(BlockDevice {
        reference: device_ref(obj)?,
        node_name: node_name(obj)?,
        host_label: host_label(obj)?,
        capacity_bytes: capacity_bytes(obj)?,
        physical_sector_size: physical_sector_size(obj)?,
        logical_sector_size: logical_sector_size(obj)?,
        device_type: device_type(obj)?,
        drive_type: drive_type(obj)?,
        state: state(obj)?,
        claim_state: claim_state(obj)?,
        has_filesystem: has_filesystem(obj)?,
    })
}

/// Map an absent field to `None`; other failures stay errors
fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::FieldNotFound { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
