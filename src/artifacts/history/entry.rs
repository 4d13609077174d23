use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::history::{CHECKOUT_MESSAGE_REGEX, RENAME_MESSAGE_REGEX};
use crate::errors::HistoryError;
use derive_new::new;
use regex::Regex;

/// HEAD moved from one branch to another
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CheckoutEvent {
    pub from: BranchName,
    pub to: BranchName,
}

/// A branch changed its name
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RenameEvent {
    pub old: BranchName,
    pub new: BranchName,
}

/// A reflog subject line the history cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflogEntry {
    Checkout(CheckoutEvent),
    Rename(RenameEvent),
}

/// Compiled templates for the reflog subject lines the history understands
#[derive(Debug, Clone)]
pub struct ReflogClassifier {
    checkout: Regex,
    rename: Regex,
}

impl ReflogClassifier {
    pub fn new() -> Result<Self, HistoryError> {
        Ok(Self {
            checkout: Regex::new(CHECKOUT_MESSAGE_REGEX)?,
            rename: Regex::new(RENAME_MESSAGE_REGEX)?,
        })
    }

    /// Classify one reflog subject line
    ///
    /// Both templates are anchored at both ends; anything that does not match
    /// one of them exactly yields `None`.
    pub fn classify(&self, message: &str) -> Option<ReflogEntry> {
        if let Some(captures) = self.rename.captures(message) {
            let (old, new) = name_pair(&captures)?;
            return Some(ReflogEntry::Rename(RenameEvent::new(old, new)));
        }

        let captures = self.checkout.captures(message)?;
        let (from, to) = name_pair(&captures)?;
        Some(ReflogEntry::Checkout(CheckoutEvent::new(from, to)))
    }
}

fn name_pair(captures: &regex::Captures<'_>) -> Option<(BranchName, BranchName)> {
    let first = BranchName::try_parse(captures.get(1)?.as_str()).ok()?;
    let second = BranchName::try_parse(captures.get(2)?.as_str()).ok()?;
    Some((first, second))
}
