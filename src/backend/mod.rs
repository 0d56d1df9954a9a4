/// Backend submodules for the channels API worker
///
/// - `handlers`: turns `BackendAction`s into API calls and `GuiEvent`s
/// - `main_loop`: owns the Tokio runtime and drains the action channel
mod handlers;
mod main_loop;

// Re-export the main backend entry point
pub use main_loop::run_backend;
