//! The "select first N rows" input.

use std::num::IntErrorKind;

use crate::error::{FolioError, Result};

/// The value held by the bulk selection overlay.
///
/// The input accepts non-negative integers only. An empty input holds no
/// value and cannot be submitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BulkCountInput {
    value: Option<usize>,
}

impl BulkCountInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// An input already holding `value`.
    pub fn with_value(value: usize) -> Self {
        Self { value: Some(value) }
    }

    /// Parse user text.
    ///
    /// Surrounding whitespace is ignored, an empty string yields an empty
    /// input, negative integers are raised to 0 and values beyond `usize`
    /// saturate. Anything that is not an integer is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::new());
        }

        match trimmed.parse::<usize>() {
            Ok(value) => Ok(Self::with_value(value)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(Self::with_value(usize::MAX)),
                _ if is_negative_integer(trimmed) => Ok(Self::with_value(0)),
                _ => Err(FolioError::invalid_bulk_count(trimmed, err.to_string())),
            },
        }
    }

    /// The entered count, if any.
    pub fn value(&self) -> Option<usize> {
        self.value
    }

    pub fn set_value(&mut self, value: Option<usize>) {
        self.value = value;
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Whether the submit button is enabled.
    pub fn is_submittable(&self) -> bool {
        self.value.is_some()
    }

    /// The count to submit against a dataset of `total` records.
    ///
    /// Returns `None` when the input is empty; otherwise the value clamped to
    /// `[0, total]`.
    pub fn submission(&self, total: usize) -> Option<usize> {
        self.value.map(|value| value.min(total))
    }
}

fn is_negative_integer(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
