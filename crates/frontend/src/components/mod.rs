//! Reusable UI components.

mod board;
mod card;
mod column;
mod error_banner;
mod footer;
mod header;
mod job_details;
mod job_form;
mod loading;
mod modal;

pub use board::Board;
pub use error_banner::ErrorBanner;
pub use footer::Footer;
pub use header::Header;
pub use job_details::JobDetails;
pub use job_form::JobForm;
pub use loading::Loading;
pub use modal::Modal;
