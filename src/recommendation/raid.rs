//! RAID Group Configuration
//!
//! A RAID group is a fixed-size cluster of devices combined under one RAID
//! policy. The group size must meet the policy's minimum, and each policy
//! determines how many devices in a group contribute usable data capacity.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// RAID Type
// =============================================================================

/// RAID policy applied to every group in a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaidType {
    Stripe,
    Mirror,
    Raidz,
    Raidz2,
}

impl RaidType {
    /// Minimum devices a group of this type must hold
    pub fn min_group_devices(&self) -> u64 {
        match self {
            RaidType::Stripe => 1,
            RaidType::Mirror => 2,
            RaidType::Raidz => 3,
            RaidType::Raidz2 => 6,
        }
    }
}

impl std::fmt::Display for RaidType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RaidType::Stripe => write!(f, "stripe"),
            RaidType::Mirror => write!(f, "mirror"),
            RaidType::Raidz => write!(f, "raidz"),
            RaidType::Raidz2 => write!(f, "raidz2"),
        }
    }
}

// =============================================================================
// RAID Group Config
// =============================================================================

/// RAID layout for a pool: the policy and the number of devices per group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidGroupConfig {
    pub raid_type: RaidType,
    pub group_device_count: u64,
}

impl RaidGroupConfig {
    /// Create a validated config
    pub fn new(raid_type: RaidType, group_device_count: u64) -> Result<Self> {
        let config = Self {
            raid_type,
            group_device_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the group size against the policy minimum
    pub fn validate(&self) -> Result<()> {
        let minimum = self.raid_type.min_group_devices();
        if self.group_device_count < minimum {
            return Err(Error::InvalidRaidConfig {
                raid_type: self.raid_type.to_string(),
                group_device_count: self.group_device_count,
                minimum,
            });
        }
        Ok(())
    }

    /// Devices per group contributing usable data capacity.
    ///
    /// Mirror groups expose a single device's capacity; RAIDZ variants lose
    /// one or two parity devices per group; stripes expose every device.
    pub fn data_device_count(&self) -> u64 {
        match self.raid_type {
            RaidType::Stripe => self.group_device_count,
            RaidType::Mirror => 1,
            RaidType::Raidz => self.group_device_count - 1,
            RaidType::Raidz2 => self.group_device_count - 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_group_size_validation() {
        assert!(RaidGroupConfig::new(RaidType::Stripe, 1).is_ok());
        assert!(RaidGroupConfig::new(RaidType::Mirror, 2).is_ok());
        assert!(RaidGroupConfig::new(RaidType::Raidz, 3).is_ok());
        assert!(RaidGroupConfig::new(RaidType::Raidz2, 6).is_ok());

        let err = RaidGroupConfig::new(RaidType::Mirror, 1).unwrap_err();
        assert_matches!(
            err,
            Error::InvalidRaidConfig {
                group_device_count: 1,
                minimum: 2,
                ..
            }
        );
        assert!(RaidGroupConfig::new(RaidType::Raidz2, 4).is_err());
    }

    #[test]
    fn test_data_device_count() {
        let stripe = RaidGroupConfig::new(RaidType::Stripe, 4).unwrap();
        assert_eq!(stripe.data_device_count(), 4);

        let mirror = RaidGroupConfig::new(RaidType::Mirror, 2).unwrap();
        assert_eq!(mirror.data_device_count(), 1);

        let raidz = RaidGroupConfig::new(RaidType::Raidz, 5).unwrap();
        assert_eq!(raidz.data_device_count(), 4);

        let raidz2 = RaidGroupConfig::new(RaidType::Raidz2, 6).unwrap();
        assert_eq!(raidz2.data_device_count(), 4);
    }

    #[test]
    fn test_data_never_exceeds_group() {
        for (raid_type, count) in [
            (RaidType::Stripe, 3),
            (RaidType::Mirror, 4),
            (RaidType::Raidz, 6),
            (RaidType::Raidz2, 8),
        ] {
            let config = RaidGroupConfig::new(raid_type, count).unwrap();
            assert!(config.data_device_count() <= config.group_device_count);
        }
    }
}
