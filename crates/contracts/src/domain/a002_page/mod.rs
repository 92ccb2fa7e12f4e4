pub mod aggregate;

pub use aggregate::{is_valid_slug, Page, PageBundle};
