//! Utility functions for rule implementations.

pub mod allowance;
pub mod naming;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use allowance::{check_allow_comment, check_allow_with_reason, AllowCheck, AllowState};
#[doc(inline)]
pub use naming::{is_kebab_case, split_role_suffix};
