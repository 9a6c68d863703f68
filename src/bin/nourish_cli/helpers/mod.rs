// ABOUTME: Helper modules for nourish-cli
// ABOUTME: Provides the text and JSON output formatting used by every command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

pub mod display;
