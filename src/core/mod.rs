pub mod engine;
pub mod links;
pub mod pipeline;
pub mod render;
pub mod sections;

pub use crate::domain::model::{Profile, RenderedPage, RenderedSite};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
