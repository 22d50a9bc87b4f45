//! Per-container configuration.

/// Which upper bound index checks use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Accept `low <= index < capacity`.
    ///
    /// Indices past the populated window but inside the allocated block are
    /// reachable, so `get` may return `None` and `set` may write slack slots.
    /// Range ends are bounded by the capacity.
    #[default]
    Capacity,

    /// Accept `low <= index <= high` only. Range ends are bounded by
    /// `high + 1`.
    Populated,
}

/// Options carried by a container and inherited by every container derived
/// from it (views, copies, and the results of structural operations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayOptions {
    pub bounds: BoundsPolicy,
}

impl ArrayOptions {
    /// Options that only accept indices inside the populated window.
    pub const fn strict() -> Self {
        Self {
            bounds: BoundsPolicy::Populated,
        }
    }
}
