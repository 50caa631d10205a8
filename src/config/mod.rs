//! Configuration loading and management for the Dock Booking Engine.
//!
//! This module provides functionality to load a marina's booking policy
//! from YAML files: marina metadata, the long-stay discount rule, and the
//! cancellation refund schedule. Built-in defaults are available through
//! [`BookingPolicy::default`].
//!
//! # Example
//!
//! ```no_run
//! use dock_booking_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded marina: {}", config.marina().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BookingPolicy, CancellationConfig, DEFAULT_LONG_STAY_DISCOUNT, DEFAULT_LONG_STAY_NIGHTS,
    MarinaMetadata, PricingPolicy, RefundPolicy, RefundTier,
};
