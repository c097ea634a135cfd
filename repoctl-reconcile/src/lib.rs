//! Reconciliation of a repository's `archived` flag.
//!
//! A reconciliation call runs `fetch → decide → act` exactly once:
//!
//! 1. [`fetch`] reads the repository through a [`RepositoryAccess`]
//!    capability. A missing repository is reported as [`Observed::Absent`],
//!    which ends the call with no result.
//! 2. [`decide`] compares the observed flag with the normalized desired
//!    value and picks at most one [`Action`].
//! 3. An [`Executor`] either applies the change or returns a
//!    [`PreviewArtifact`](repoctl_core::change::PreviewArtifact) describing
//!    it. The mode is fixed when the [`Reconciler`] is constructed.
//!
//! Remote failures other than "not found" are returned to the caller as-is.
//! Retrying is the caller's business.

pub mod access;
pub mod decide;
pub mod execute;
pub mod fetch;
pub mod log;
pub mod reconciler;

#[cfg(test)]
pub(crate) mod testing;

pub use access::{AccessError, RepositoryAccess, UpdateParams};
pub use decide::{decide, Action};
pub use execute::{Executor, Outcome};
pub use fetch::{fetch, Observed};
pub use log::{Logger, TracingLogger};
pub use reconciler::Reconciler;
