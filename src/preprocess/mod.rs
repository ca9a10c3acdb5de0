//! Feature scaling fitted on training data only
//!
//! A [`Scaling`] strategy is fitted against a training matrix to produce a
//! [`FittedScaler`] whose parameters are frozen; applying it to held-out
//! data can never leak that data's statistics back into the transform.

mod scaler;

pub use scaler::{FittedScaler, Scaling};
