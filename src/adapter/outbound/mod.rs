//! Outbound adapters (driven side).

pub mod html;
pub mod http;
pub mod json_file;
