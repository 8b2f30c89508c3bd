//! Rerail Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorToolState, InteractionPhase,
    RenderDriver, ToolMode, ViewState,
};
pub use core::{MapEngine, MapSnapshot, RailwayMap, Viewport};
pub use shared::{EditorOptions, RenderRequest, Renderer};
