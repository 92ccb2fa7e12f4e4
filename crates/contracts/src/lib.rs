//! Types and pure logic shared by the backend service and the browser app.

pub mod domain;
pub mod enums;
pub mod shared;
