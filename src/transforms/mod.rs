// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod registry;
pub mod reverse_words;
pub mod stub;

pub use factory::TransformFactory;
pub use registry::TransformRegistry;
pub use reverse_words::{reverse_words, ReverseWordsTransform};
