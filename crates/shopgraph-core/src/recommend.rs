//! Recommendation result models.

use serde::{Deserialize, Serialize};

/// A product suggested by co-occurrence in other orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: i64,
    pub name: String,
    /// Number of co-occurrence paths leading to this product.
    pub score: i64,
}

/// Ranked recommendations for one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationList {
    pub customer: i64,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationList {
    pub fn new(customer: i64, recommendations: Vec<Recommendation>) -> Self {
        Self {
            customer,
            recommendations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
