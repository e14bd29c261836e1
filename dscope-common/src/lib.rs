//! # DistroScope Common Library
//!
//! Core of the DistroScope catalog browser:
//! - Catalog data model and loading
//! - Filter engine backing the explorer view
//! - Recommendation engine backing the wizard view
//! - Comparison selection state machine
//! - Configuration resolution
//!
//! Everything here is synchronous and side-effect free; the HTTP surface
//! lives in `dscope-ui`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod recommend;
pub mod selection;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use filter::{filter, FilterCriteria};
pub use model::{Base, DistroRecord, Experience, Links, Requirements, UseCase};
pub use recommend::{recommend, RecommendationCriteria};
pub use selection::{SelectionState, ToggleOutcome, MAX_COMPARE};
