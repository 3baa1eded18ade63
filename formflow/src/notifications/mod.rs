//! Toast notifications.

mod sink;
mod toast;

pub use sink::{CollectingToastSink, LoggingToastSink, NoOpToastSink, ToastSink};
pub use toast::{Toast, ToastKind};
