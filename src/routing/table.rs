//! Ordered routing table: first matching branch wins, else the default
//!
//! The table is built once at wiring time and is read-only afterwards.
//! Branches are evaluated top to bottom against the transaction value only,
//! so the decision is a pure function of the value and can be inspected and
//! tested in isolation from any sink.

use std::fmt;

use crate::domain::{Classification, ItemTransaction, classify};

/// Where a routed record ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Valid,
    DeadLetter,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Valid => write!(f, "valid"),
            Destination::DeadLetter => write!(f, "dead-letter"),
        }
    }
}

/// One named branch: a predicate over the transaction value and its target
pub struct Branch<D> {
    name: String,
    predicate: Box<dyn Fn(&ItemTransaction) -> bool + Send + Sync>,
    destination: D,
}

impl<D: Copy> Branch<D> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn destination(&self) -> D {
        self.destination
    }

    pub fn matches(&self, value: &ItemTransaction) -> bool {
        (self.predicate)(value)
    }
}

impl<D: fmt::Debug> fmt::Debug for Branch<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("name", &self.name)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

/// Ordered list of branches with an explicit default destination
#[derive(Debug)]
pub struct RouteTable<D> {
    branches: Vec<Branch<D>>,
    default: D,
}

impl<D: Copy> RouteTable<D> {
    /// Create an empty table routing everything to `default`
    pub fn new(default: D) -> Self {
        Self {
            branches: Vec::new(),
            default,
        }
    }

    /// Append a branch; earlier branches take precedence
    pub fn branch<F>(mut self, name: impl Into<String>, predicate: F, destination: D) -> Self
    where
        F: Fn(&ItemTransaction) -> bool + Send + Sync + 'static,
    {
        self.branches.push(Branch {
            name: name.into(),
            predicate: Box::new(predicate),
            destination,
        });
        self
    }

    /// Select the destination for one value: first match wins, else default
    pub fn select(&self, value: &ItemTransaction) -> D {
        self.branches
            .iter()
            .find(|b| b.matches(value))
            .map(|b| b.destination)
            .unwrap_or(self.default)
    }

    /// The branches in evaluation order
    pub fn branches(&self) -> &[Branch<D>] {
        &self.branches
    }

    /// The destination used when no branch matches
    pub fn default_destination(&self) -> D {
        self.default
    }
}

impl RouteTable<Destination> {
    /// The shipped topology: mandatory-field failures go to the dead-letter
    /// channel, everything else to the valid channel.
    pub fn standard() -> Self {
        RouteTable::new(Destination::Valid).branch(
            "missing-mandatory-fields",
            |value| classify(value) == Classification::Invalid,
            Destination::DeadLetter,
        )
    }
}
