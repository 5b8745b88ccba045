pub mod app;
pub mod components;
pub mod context;

pub use app::App;
pub use context::{NavTarget, RefData, RenderMode};
