//! Infrastructure layer: storage behind the domain repository traits.
//!
//! - [`persistence`] - PostgreSQL repositories for travels and tours

pub mod persistence;
