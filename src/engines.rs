//! # Compute-engine lifecycle boundary.
//!
//! Controllers that run heavy queries do so against out-of-process compute
//! engines. Creating and destroying those engines is outside this crate's
//! scope; [`EngineAllocator`] is the interface controllers consume, and the
//! core never calls it.
//!
//! ## Example (skeleton)
//! ```
//! use statevisor::engines::{EngineAllocator, EngineId};
//!
//! struct StubAllocator {
//!     next: u64,
//! }
//!
//! impl EngineAllocator for StubAllocator {
//!     type Handle = EngineId;
//!
//!     fn create_engine(&mut self) -> EngineId {
//!         self.next += 1;
//!         EngineId::new(format!("engine-{}", self.next))
//!     }
//!
//!     fn destroy_engine(&mut self, _id: &EngineId) {}
//! }
//!
//! let mut alloc = StubAllocator { next: 0 };
//! let id = alloc.create_engine();
//! assert_eq!(id.as_str(), "engine-1");
//! alloc.destroy_engine(&id);
//! ```

/// Opaque identifier of a compute engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EngineId(String);

impl EngineId {
    /// Creates an identifier from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The string form of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EngineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contract for allocating and tearing down compute engines.
///
/// Implementations own the actual engine processes/workers. Controllers
/// hold whatever allocator they were built with; the reconciliation core
/// itself never allocates engines.
pub trait EngineAllocator {
    /// Handle to a live engine, opaque to this crate.
    type Handle;

    /// Brings up a new engine and returns its handle.
    fn create_engine(&mut self) -> Self::Handle;

    /// Tears down the engine with the given identifier.
    fn destroy_engine(&mut self, id: &EngineId);
}
