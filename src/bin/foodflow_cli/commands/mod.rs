// ABOUTME: Re-exports command modules for foodflow-cli
// ABOUTME: Provides access to the plans and progress commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

pub mod plans;
pub mod progress;
