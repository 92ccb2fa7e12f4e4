pub mod a001_locality;
pub mod a002_page;
