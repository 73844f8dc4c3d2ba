// Company Tracker - Core Library
// Record model for job-application entries and the duplicate checks that keep
// a collection of them consistent.

pub mod error;
pub mod status;
pub mod fields;
pub mod company;
pub mod store;
pub mod deduplication;
pub mod sample;
pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use error::{RecordError, Result};
pub use status::StatusCode;
pub use fields::{Deadline, Email, Name, Phone, RecruiterName, Role, Tag};
pub use company::{Company, CompanyBuilder, TagView};
pub use store::{CompanyComparator, CompanyModel, CompanyPredicate, CompanyStore};
pub use deduplication::{DuplicateAuditor, DuplicateMatch, MatchStrategy};
pub use sample::{sample_companies, sample_store};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
