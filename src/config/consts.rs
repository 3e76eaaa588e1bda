// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in defaults for the service configuration.

/// Bind host used when none is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Bind port used when none is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Records returned by a history query when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Hard ceiling for history query limits.
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Transform applied to submissions that do not name one.
pub const DEFAULT_TRANSFORM: &str = "reverse_words";

/// Longest accepted submission, in characters. Mirrors the input cap the
/// web client enforces.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 5000;
