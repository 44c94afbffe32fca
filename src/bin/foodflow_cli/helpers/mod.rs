// ABOUTME: Re-exports helper modules for foodflow-cli
// ABOUTME: Provides access to input loading and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodFlow Contributors

pub mod display;
pub mod input;
