// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod export_service;
pub mod guest_service;
pub mod order_service;
pub mod stats_service;

pub use export_service::*;
pub use guest_service::*;
pub use order_service::*;
pub use stats_service::*;
