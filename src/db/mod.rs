// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod guest_repository;
pub mod order_repository;
pub mod schema;

pub use guest_repository::*;
pub use order_repository::*;
pub use schema::*;
