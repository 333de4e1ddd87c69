//! Per-item outcome records returned by batch operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PRINT_OBJECT_NULL;
use crate::error::{SdkError, SdkResult};

/// Wire name of the item identifier field
pub const ID: &str = "id";
/// Wire name of the outcome field
pub const RESULT: &str = "result";
/// Wire name of the diagnostic message field
pub const MESSAGE: &str = "message";
/// Wire literal for a successful item
pub const SUCCESS: &str = "success";
/// Wire literal for a failed item
pub const ERROR: &str = "error";

/// Width of the widest label in the diagnostic rendering
const LABEL_WIDTH: usize = 7;

/// Outcome of a single item in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    /// Wire literal for this outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => SUCCESS,
            Outcome::Error => ERROR,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome record for one item of a batch operation.
///
/// Records are correlated with the submitted items by `id`, never by
/// position. The fields can only be changed through the paired setters,
/// which update the outcome together with the id and/or message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "result")]
    outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ItemResult {
    /// Build a record without checking the error-message invariant.
    ///
    /// Server responses are accepted as they come; use [`ItemResult::checked`]
    /// for records built locally.
    pub fn new(id: impl Into<String>, outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            outcome,
            message: Some(message.into()),
        }
    }

    /// Build a record, rejecting an error outcome without a message.
    pub fn checked(
        id: impl Into<String>,
        outcome: Outcome,
        message: impl Into<String>,
    ) -> SdkResult<Self> {
        let result = Self::new(id, outcome, message);
        if !result.is_consistent() {
            return Err(SdkError::invalid_argument(
                "message cannot be blank for an error result.",
            ));
        }
        Ok(result)
    }

    pub fn success(id: impl Into<String>) -> Self {
        Self::new(id, Outcome::Success, "")
    }

    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, Outcome::Error, message)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn is_error(&self) -> bool {
        !self.outcome.is_success()
    }

    /// False when an error record carries no diagnostic message
    pub fn is_consistent(&self) -> bool {
        match self.outcome {
            Outcome::Success => true,
            Outcome::Error => self.message.as_deref().is_some_and(|m| !m.is_empty()),
        }
    }

    /// Mark as successful. The message is left as is.
    pub fn set_success(&mut self) {
        self.outcome = Outcome::Success;
    }

    /// Mark as successful and replace the id. The message is left as is.
    pub fn set_success_for(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
        self.outcome = Outcome::Success;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.outcome = Outcome::Error;
        self.message = Some(message.into());
    }

    pub fn set_error_for(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.id = Some(id.into());
        self.outcome = Outcome::Error;
        self.message = Some(message.into());
    }
}

impl fmt::Display for ItemResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        write_line(f, ID, self.id.as_deref())?;
        write_line(f, RESULT, Some(self.outcome.as_str()))?;
        write_line(f, MESSAGE, self.message.as_deref())?;
        writeln!(f, "}}")
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, label: &str, value: Option<&str>) -> fmt::Result {
    writeln!(
        f,
        "     {:<width$} : {}",
        label,
        value.unwrap_or(PRINT_OBJECT_NULL),
        width = LABEL_WIDTH
    )
}

/// Summary view over the records of one batch response
#[derive(Debug, Clone, Copy)]
pub struct BatchOutcome<'a> {
    results: &'a [ItemResult],
}

impl<'a> BatchOutcome<'a> {
    pub fn new(results: &'a [ItemResult]) -> Self {
        Self { results }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(ItemResult::is_success)
    }

    /// Records with an error outcome, in response order
    pub fn failures(&self) -> impl Iterator<Item = &'a ItemResult> + 'a {
        self.results.iter().filter(|r| r.is_error())
    }

    /// First record carrying the given id
    pub fn find(&self, id: &str) -> Option<&'a ItemResult> {
        self.results.iter().find(|r| r.id() == Some(id))
    }
}
