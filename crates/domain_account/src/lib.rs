//! # Back-Office Account Domain
//!
//! The people who operate the back office: user accounts with access
//! roles, the teams they belong to, and the Argon2 credential hashing
//! used at login.
//!
//! Accounts are separate from the subscriber-facing domains. A
//! [`User`] is an operator of the system; a customer never logs in.
//! Role checks themselves live at the API boundary, this crate only
//! defines the role taxonomy and the hashing primitives.

pub mod error;
pub mod password;
pub mod team;
pub mod user;

pub use error::AccountError;
pub use password::{hash_password, verify_password};
pub use team::Team;
pub use user::{Role, User};
