// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod invoke;
pub mod responses;
pub mod reversed_texts;
pub mod server;

#[cfg(test)]
mod integration_tests;

pub use server::{build_router, serve, AppState};
