//! # Pricer Models (L2: Business Logic)
//!
//! Financial instruments, schedules and closed-form models.
//!
//! This crate provides:
//! - Analytical formulas (Black-Scholes with Greeks, Black-76)
//! - The SABR implied volatility model
//! - Payment schedules for swap legs
//! - Instrument definitions (European and barrier options, vanilla swaps)
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch
//! - **Shared market data**: bound curves and surfaces are `Arc` handles
//!   owned by the caller's market data container
//! - **Builder pattern** for optional inputs (`with_curve`, `with_rebate`, ...)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
pub mod schedules;
