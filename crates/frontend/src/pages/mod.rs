pub mod api;
pub mod page_view;
