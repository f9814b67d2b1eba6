// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod guest;
pub mod order;
pub mod stats;

pub use guest::*;
pub use order::*;
pub use stats::*;
