//! Pool Recommender
//!
//! Helper library for a Kubernetes storage-pool operator: a condition
//! mini-DSL over unstructured objects, and a block-device capacity/device
//! recommendation engine for RAID-backed storage pools.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      Recommendation Engine                       │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐   ┌──────────────┐   ┌─────────────────────┐  │
//! │  │  Inspector   │──▶│ Eligibility  │──▶│  Topology Index      │  │
//! │  │ (typed read) │   │   Filter     │   │ class ▸ node ▸ tier  │  │
//! │  └──────────────┘   └──────────────┘   └──────────┬──────────┘  │
//! │                                                    │             │
//! │                          ┌─────────────────────────┴──────────┐  │
//! │                          │                                    │  │
//! │               ┌──────────▼─────────┐          ┌──────────────▼┐ │
//! │               │ CapacityRecommender│          │ DeviceAllocator│ │
//! │               │   [min, max] range │          │ whole-group    │ │
//! │               └────────────────────┘          │ selection      │ │
//! │                                               └────────────────┘ │
//! ├──────────────────────────────────────────────────────────────────┤
//! │        Condition DSL (kind / apiVersion / labels / annotations)  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`unstruct`]: typed accessors over unstructured Kubernetes objects
//! - [`condition`]: object predicate DSL with diagnostic reasons
//! - [`blockdevice`]: device descriptors, inspection, and pool eligibility
//! - [`recommendation`]: RAID config, topology index, range and allocation queries
//! - [`error`]: error types and handling
//!
//! All computation is synchronous and pure: a recommendation call builds a
//! fresh index from its input list, holds no shared state, and is safe to
//! run concurrently with other calls.

pub mod blockdevice;
pub mod condition;
pub mod error;
pub mod recommendation;
pub mod unstruct;

// Re-export commonly used types
pub use blockdevice::{
    filter_eligible, is_pool_eligible, BlockDevice, ClaimState, DeviceRef, DeviceState, DriveType,
};

pub use condition::{CheckResult, CombineMode, Condition, ConditionSet, Verdict};

pub use error::{Error, Result};

pub use recommendation::{
    CapacityRange, CapacityRecommender, ClassAllocation, DeviceAllocator, DeviceClass,
    PoolInstance, RaidGroupConfig, RaidType, Topology,
};

pub use unstruct::{bytes_at, lookup, parse_capacity, string_at};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
