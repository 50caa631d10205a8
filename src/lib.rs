//! Booking engine for dock slip rentals
//!
//! This crate decides whether a slip is free for a range of nights, prices a
//! stay (including the long-stay renter discount), and settles cancellations
//! against a tiered refund schedule. Fee-exempt occupant classes are never
//! charged and never refunded.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
