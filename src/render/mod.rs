//! Rendering: driving the pipeline and presenting its output.

mod json;
mod options;
mod presenter;
mod renderer;
mod result;

pub use json::{to_json, JsonFormat};
pub use options::{PageSelection, RenderOptions};
pub use presenter::{render_events, Presenter, RenderEvent};
pub use renderer::Renderer;
pub use result::{RenderResult, RenderStats};
