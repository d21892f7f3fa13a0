//! Shopgraph Core Library
//!
//! Domain models shared by the relational reader, the graph loader
//! and the recommendation service.

pub mod error;
pub mod event;
pub mod load;
pub mod recommend;

pub use error::{ShopError, ShopResult};
pub use event::EventType;
pub use load::{LoadCounts, LoadReport};
pub use recommend::{Recommendation, RecommendationList};
