//! Page modules.
//!
//! The campaign ships a single screen; `register` owns the submission
//! orchestration and delegates rendering details to `components`.

pub mod register;
