//! Typed content sources feeding the query engine.
//!
//! Posts and resources each carry a closed category enum. Both convert into
//! `ContentItem`, which is what the engine filters and sorts. Display
//! attributes (colors, icons) stay with the rendering layer; only the
//! category labels shown in filter tabs live here.

mod category;
mod post;
mod resource;

pub use category::CategoryOption;
pub use post::{Post, PostCategory};
pub use resource::{Difficulty, Resource, ResourceCategory, ResourceKind};
