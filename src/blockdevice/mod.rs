//! Block Device Module
//!
//! Typed block-device descriptors, the inspector that derives them from raw
//! Kubernetes objects, and the pool-eligibility admission filter.

pub mod descriptor;
pub mod eligibility;
pub mod inspector;

pub use descriptor::*;
pub use eligibility::*;
pub use inspector::*;
