//! Feature-selection and hyperparameter-sweep wrappers
//!
//! Each wrapper repeatedly invokes the cross-validation harness under
//! varying conditions — a different feature subset or a different scalar
//! hyperparameter — and records the aggregate metric per condition. All
//! loops are linear: no backtracking, no state across invocations.

mod selection;
mod sweep;

pub use selection::{backward_elimination, forward_selection, SelectionStep};
pub use sweep::{sweep, SweepPoint};
