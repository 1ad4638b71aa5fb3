//! Credential signing, typed identifiers, and access-token state.

pub mod credential;
pub mod id;
pub mod renewer;
pub mod token;

pub use credential::*;
pub use id::*;
pub use renewer::*;
pub use token::{secret::*, *};
