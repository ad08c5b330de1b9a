//! Synthetic identity generation
//!
//! Produces randomized user records for the signup and login phases.

mod identity;

pub use identity::IdentityGenerator;
