pub mod config;
pub mod console;
pub mod error;
pub mod kernel;
pub mod surface;

// Re-export the host-facing contract
pub use config::{NoticeText, PlayerConfig};
pub use error::AnnotatorError;
pub use kernel::annotation::{Annotation, TrialOutcome, TrialResult, VideoRef};
pub use kernel::event::Event;
pub use kernel::reactor::{start, EventSender, Surface, TrialHandle};
