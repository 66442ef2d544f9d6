//! Error types returned by grid construction and path searches.

use crate::Cell;
use core::fmt;
use thiserror::Error;

/// Which end of a search an [PathfindingError::InvalidEndpoint] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointRole {
    Start,
    Goal,
}

/// Why an endpoint was rejected before the search began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointIssue {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointRole::Start => write!(f, "start"),
            EndpointRole::Goal => write!(f, "goal"),
        }
    }
}

impl fmt::Display for EndpointIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointIssue::OutOfBounds => write!(f, "outside the grid"),
            EndpointIssue::Blocked => write!(f, "on a blocked cell"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathfindingError {
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    #[error("Cell {0} is outside the grid")]
    InvalidCell(Cell),

    #[error("Invalid {role} {cell}: {issue}")]
    InvalidEndpoint {
        role: EndpointRole,
        cell: Cell,
        issue: EndpointIssue,
    },

    /// An unreachable goal is a valid maze configuration, not a fault.
    #[error("No path from {start} to {goal}")]
    NoPathFound { start: Cell, goal: Cell },

    #[error("Search stopped after expanding {0} nodes")]
    ExpansionLimit(usize),

    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PathfindingError>;
