// ABOUTME: Core types and constants for the FoodFlow nutrition engine
// ABOUTME: Foundation crate with error handling, profile/plan models, and energy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

#![deny(unsafe_code)]

//! # `FoodFlow` Core
//!
//! Foundation crate providing the shared types and constants for the `FoodFlow`
//! nutrition plan engine. It holds no algorithms; the calculator and the
//! progress tracking live in the main crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities and safety limits
//! - **models**: Physical profile, nutrition plans, meals and daily intake

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants (energy densities, calorie limits, macro floors)
pub mod constants;

/// Domain models (profile, plans, meals, daily intake)
pub mod models;
