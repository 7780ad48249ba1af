//! Recommendation Module
//!
//! The capacity/device recommendation engine: RAID layout configuration,
//! the device topology index, the capacity-range recommender, and the
//! concrete device allocator.

pub mod allocator;
pub mod capacity;
pub mod raid;
pub mod topology;

pub use allocator::*;
pub use capacity::*;
pub use raid::*;
pub use topology::*;
