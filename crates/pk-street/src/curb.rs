use pk_core::{ContainerId, ResourceId};

/// The shared pieces of street every vehicle competes for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Curb {
    /// Concurrent service slots on the street.
    pub street:  ResourceId,
    /// Goods budget.
    pub parking: ContainerId,
    /// Goods units unloaded per time unit.
    pub speed:   f64,
}
