//! Chat widget components.
//!
//! Layout and structure for the chat interface. The transcript container is
//! an HTMX swap target; the input form posts to the server and the response
//! fragment replaces the transcript contents.

mod header;
mod input_area;
mod shell;
mod transcript;

pub use header::ChatHeader;
pub use input_area::ChatInputArea;
pub use shell::ChatShell;
pub use transcript::TranscriptView;
