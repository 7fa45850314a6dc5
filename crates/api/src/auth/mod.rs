//! Session tokens.
//!
//! - [`jwt`] -- JWT access-token generation and validation.
//!
//! Password hashing lives in `ers_core::password` because credential checks
//! happen in the user service.

pub mod jwt;
