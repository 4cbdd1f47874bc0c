//! Deterministic synthetic data
//!
//! Every value is a pure function of the record index and the static tables in
//! [`tables`]; there is no randomness and no clock access, so two runs produce
//! identical output.
//!
//! - [`tables`] - fixed name/place/company/tag lists
//! - [`calendar`] - date offsets from the 2020-01-01 base date
//! - [`users`] - the `/users` record generator

pub mod calendar;
pub mod tables;
pub mod users;

pub use users::{USER_COUNT, build_user, generate_users};
