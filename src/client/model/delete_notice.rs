//! Notice shown on a delete confirmation view after a failed attempt.
//!
//! Carried in the `notice` query argument so a reload of the confirmation view keeps
//! showing why the previous attempt did not go through.

use std::{fmt, str::FromStr};

use crate::model::course::DELETE_CONFLICT_MESSAGE;

/// Message for a delete that failed in the database.
pub const DELETE_FAILED_MESSAGE: &str =
    "Delete failed. Try again, and if the problem persists see your system administrator.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteNotice {
    #[default]
    None,
    Conflict,
    Failed,
}

impl DeleteNotice {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Conflict => Some(DELETE_CONFLICT_MESSAGE),
            Self::Failed => Some(DELETE_FAILED_MESSAGE),
        }
    }

    pub fn is_set(&self) -> bool {
        *self != Self::None
    }
}

impl fmt::Display for DeleteNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Conflict => write!(f, "conflict"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for DeleteNotice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::None),
            "conflict" => Ok(Self::Conflict),
            "failed" => Ok(Self::Failed),
            other => Err(format!("Unknown delete notice: {}", other)),
        }
    }
}
