// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::time::Instant;

use crate::observability::messages::{transform::*, StructuredLog};
use crate::protocol::{Outcome, TransformRequest, TransformResponse};
use crate::traits::Transform;

fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Reverse the letters of each word while maintaining the original sentence
/// structure and preserving punctuation positions.
///
/// Tokens are the runs between space characters (U+0020); splitting is on
/// that single character, not generic whitespace, so runs of spaces survive
/// as empty tokens. Line breaks inside a token delimit independently
/// reversed segments and stay exactly where they were, which is what lets
/// multiline submissions round-trip line by line. Within a segment, only the
/// span from the first to the last ASCII-alphanumeric character is reversed;
/// anything before or after it stays put. Whitespace-only input collapses to
/// the empty string.
///
/// Example:
/// Input: "The red fox crosses the ice, intent on none of my business."
/// Output: "ehT der xof sessorc eht eci, tnetni no enon fo ym ssenisub."
pub fn reverse_words(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    text.split(' ')
        .map(reverse_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn reverse_token(token: &str) -> String {
    token
        .split('\n')
        .map(reverse_core_span)
        .collect::<Vec<_>>()
        .join("\n")
}

fn reverse_core_span(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();

    // Skip leading punctuation to find where the actual word starts.
    let start = match chars.iter().position(|c| is_alphanumeric(*c)) {
        Some(index) => index,
        // No alphanumeric characters, return as is
        None => return segment.to_string(),
    };
    // A first match guarantees a last match.
    let end = chars
        .iter()
        .rposition(|c| is_alphanumeric(*c))
        .unwrap_or(start);

    // Interior punctuation rides along in mirrored position; only the
    // boundaries keep their places.
    let mut reassembled = String::with_capacity(segment.len());
    reassembled.extend(&chars[..start]);
    reassembled.extend(chars[start..=end].iter().rev());
    reassembled.extend(&chars[end + 1..]);
    reassembled
}

/// Word Reverser transform - reverses the alphanumeric core of each word
pub struct ReverseWordsTransform;

impl ReverseWordsTransform {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transform for ReverseWordsTransform {
    async fn apply(&self, req: TransformRequest) -> TransformResponse {
        let start_msg = TransformExecutionStarted {
            transform_id: self.name(),
            input_chars: req.payload.chars().count(),
        };

        let span = start_msg.span("transform_execution");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        let reversed = reverse_words(&req.payload);
        let duration = start_time.elapsed();

        TransformExecutionCompleted {
            transform_id: self.name(),
            input_chars: start_msg.input_chars,
            output_chars: reversed.chars().count(),
            duration,
        }
        .log();

        TransformResponse {
            outcome: Outcome::Output(reversed),
        }
    }

    fn name(&self) -> &'static str {
        "reverse_words"
    }
}
