use core::fmt;
use core::num::NonZeroU32;

/// Compact node identifier for flow networks.
///
/// - `u32` keeps adjacency and residual arrays small
/// - `NonZero` enables `Option<NodeId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u32", into = "u32")
)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Largest representable 0-based index.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    /// Largest node count whose indices all fit in a `NodeId`.
    pub const MAX_NODE_COUNT: usize = u32::MAX as usize;

    /// Create a NodeId from a 0-based index by storing index+1.
    ///
    /// `index` must not exceed [`NodeId::MAX_INDEX`]; parsers check with
    /// [`NodeId::try_from_index`] first.
    pub fn from_index(index: u32) -> Self {
        debug_assert!(index <= Self::MAX_INDEX, "node index {index} out of range");
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Create a NodeId from a 0-based index, if it is representable.
    pub fn try_from_index(index: u32) -> Option<Self> {
        (index <= Self::MAX_INDEX).then(|| Self::from_index(index))
    }

    /// Create a NodeId from a `usize` index, if it fits.
    pub fn try_from_usize(index: usize) -> Option<Self> {
        u32::try_from(index).ok().and_then(Self::try_from_index)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as `usize`, for slicing per-node arrays.
    pub fn as_usize(self) -> usize {
        self.index() as usize
    }
}

impl From<u32> for NodeId {
    fn from(index: u32) -> Self {
        Self::from_index(index)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.index()
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
