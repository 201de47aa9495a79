mod component;
mod input;
mod render;
mod state;

pub use component::GraphEditorCanvas;
