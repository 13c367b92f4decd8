//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> stdout
//!                                                                ==(Text)==> [ View ] --> stdout
//! ```
//!
//! * `view_models`: raw data only. The JSON report is the serialized view model.
//! * `presenters`: turn engine records into view models.
//! * `views`: `fmt::Display` layouts for the narrative report, including color.
//! * `renderers`: choose JSON or text and write to stdout.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::ReportViewModel;
pub use views::ReportView;
