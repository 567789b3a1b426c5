// View layer: one pure render function per section plus the page shell.
// Each view takes an immutable content snapshot and the request's UiState.

pub mod experiential;
pub mod handlers;
pub mod html;
pub mod reflections;
pub mod resume;
pub mod shell;
pub mod showcase;
pub mod ui_state;
