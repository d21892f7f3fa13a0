//! Behavioral event kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShopError;

/// Kind of a customer interaction with a product.
///
/// Each kind maps to its own relationship type in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    View,
    Click,
    AddToCart,
}

impl EventType {
    /// All kinds, in load order.
    pub const ALL: [EventType; 3] = [Self::View, Self::Click, Self::AddToCart];

    /// Source-table spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Click => "click",
            Self::AddToCart => "add_to_cart",
        }
    }

    /// Relationship type used for the Customer -> Product edge.
    pub fn rel_type(&self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Click => "CLICK",
            Self::AddToCart => "ADD_TO_CART",
        }
    }
}

impl FromStr for EventType {
    type Err = ShopError;

    /// Exact match on the source spelling. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "click" => Ok(Self::Click),
            "add_to_cart" => Ok(Self::AddToCart),
            other => Err(ShopError::UnknownEventType(other.to_string())),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
