//! appbuilder-ui: the editing side of the app builder.
//!
//! Holds the undo/redo history, the editing tools, the editor session and the
//! render surface that turns a snapshot into drawable elements.

pub mod config;
pub mod editor;

pub use config::EditorConfig;
pub use editor::{
    render_canvas, render_component, AddComponent, CanvasView, EditorSession, History,
    HistoryConfig, RemoveComponent, RenderedElement, SessionError, Tool, UpdateComponent,
};
