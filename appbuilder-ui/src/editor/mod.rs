// Editor module for the app builder.

pub mod canvas;
pub mod history;
pub mod session;
pub mod tools;

pub use canvas::{render_canvas, render_component, CanvasView, RenderedElement};
pub use history::{History, HistoryConfig};
pub use session::{EditorSession, SessionError};
pub use tools::{AddComponent, RemoveComponent, Tool, UpdateComponent};
