//! Configuration validation engine
//!
//! Validation is split into three layers:
//!
//! 1. [`result`]: the verdict model, errors and warnings with their merge
//!    algebra.
//! 2. [`rules`]: generic, stateless rules (required keys, allowed values,
//!    numeric ranges, implementation capabilities, custom predicates) plus
//!    the best-practice warning battery.
//! 3. [`profiles`]: fixed rule compositions for the producer, consumer,
//!    and admin client roles.
//!
//! Rule and profile functions always return a [`ValidationResult`]; turning
//! a failing result into an error is the job of
//! [`crate::error::ensure_valid`].

pub mod capability;
pub mod profiles;
pub mod result;
pub mod rules;

pub use capability::{Capability, CapabilityRegistry};
pub use result::{
    ValidationError, ValidationErrorKind, ValidationResult, ValidationWarning,
    ValidationWarningKind,
};
