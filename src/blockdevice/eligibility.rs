//! Pool Eligibility Filter
//!
//! Admission predicates deciding which devices may join a storage pool. A
//! malformed or ineligible device is dropped from consideration and logged;
//! it never aborts the batch.

use kube::core::DynamicObject;
use tracing::{debug, warn};

use super::descriptor::{BlockDevice, ClaimState, DeviceState};
use super::inspector;

/// Whether a device passes the pool admission predicates.
///
/// A device is pool-eligible iff it is active, unclaimed, carries no
/// filesystem, and reports both a node name and a host label.
pub fn is_pool_eligible(device: &BlockDevice) -> bool {
    device.state == DeviceState::Active
        && device.claim_state == ClaimState::Unclaimed
        && !device.has_filesystem
        && !device.node_name.is_empty()
        && !device.host_label.is_empty()
}

/// Inspect raw device objects and keep the pool-eligible ones.
///
/// Input order is preserved; it determines which devices an allocation
/// selects within a capacity tier.
pub fn filter_eligible(objects: &[DynamicObject]) -> Vec<BlockDevice> {
    objects
        .iter()
        .filter_map(|obj| match inspector::inspect(obj) {
            Ok(device) => {
                if is_pool_eligible(&device) {
                    Some(device)
                } else {
                    debug!(
                        device = %device.reference.name,
                        state = ?device.state,
                        claim_state = ?device.claim_state,
                        has_filesystem = device.has_filesystem,
                        "device not pool-eligible, skipping"
                    );
                    None
                }
            }
            Err(err) => {
                warn!(
                    device = obj.metadata.name.as_deref().unwrap_or("<unnamed>"),
                    error = %err,
                    "dropping malformed block device record"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockdevice::descriptor::{DeviceRef, DriveType};
    use serde_json::json;

    fn descriptor(state: DeviceState, claim: ClaimState, fs: bool) -> BlockDevice {
        BlockDevice {
            reference: DeviceRef {
                kind: "BlockDevice".into(),
                api_version: "openebs.io/v1alpha1".into(),
                name: "bd-1".into(),
                namespace: Some("openebs".into()),
                uid: None,
            },
            node_name: "worker-1".into(),
            host_label: "worker-1".into(),
            capacity_bytes: 1 << 30,
            physical_sector_size: None,
            logical_sector_size: None,
            device_type: "disk".into(),
            drive_type: DriveType::Hdd,
            state,
            claim_state: claim,
            has_filesystem: fs,
        }
    }

    fn raw_device(name: &str, state: &str, claim: &str) -> DynamicObject {
        serde_json::from_value(json!({
            "apiVersion": "openebs.io/v1alpha1",
            "kind": "BlockDevice",
            "metadata": {
                "name": name,
                "labels": { "kubernetes.io/hostname": "worker-1" }
            },
            "spec": {
                "capacity": { "storage": "50Gi" },
                "details": { "deviceType": "disk", "driveType": "HDD" },
                "nodeAttributes": { "nodeName": "worker-1" }
            },
            "status": { "state": state, "claimState": claim }
        }))
        .unwrap()
    }

    #[test]
    fn test_eligible_device() {
        let device = descriptor(DeviceState::Active, ClaimState::Unclaimed, false);
        assert!(is_pool_eligible(&device));
    }

    #[test]
    fn test_rejects_inactive() {
        let device = descriptor(DeviceState::Inactive, ClaimState::Unclaimed, false);
        assert!(!is_pool_eligible(&device));
    }

    #[test]
    fn test_rejects_claimed() {
        let device = descriptor(DeviceState::Active, ClaimState::Claimed, false);
        assert!(!is_pool_eligible(&device));
    }

    #[test]
    fn test_rejects_filesystem() {
        let device = descriptor(DeviceState::Active, ClaimState::Unclaimed, true);
        assert!(!is_pool_eligible(&device));
    }

    #[test]
    fn test_rejects_empty_node() {
        let mut device = descriptor(DeviceState::Active, ClaimState::Unclaimed, false);
        device.node_name.clear();
        assert!(!is_pool_eligible(&device));
    }

    #[test]
    fn test_filter_preserves_order_and_drops_bad_records() {
        let malformed: DynamicObject = serde_json::from_value(json!({
            "apiVersion": "openebs.io/v1alpha1",
            "kind": "BlockDevice",
            "metadata": { "name": "bd-broken" }
        }))
        .unwrap();

        let objects = vec![
            raw_device("bd-1", "Active", "Unclaimed"),
            malformed,
            raw_device("bd-2", "Active", "Claimed"),
            raw_device("bd-3", "Active", "Unclaimed"),
        ];

        let eligible = filter_eligible(&objects);
        let names: Vec<&str> = eligible
            .iter()
            .map(|d| d.reference.name.as_str())
            .collect();
        assert_eq!(names, vec!["bd-1", "bd-3"]);
    }
}
