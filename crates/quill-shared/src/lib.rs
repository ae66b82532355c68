//! # Quill Shared
//!
//! Request forms and view models exchanged between the server and whatever
//! renders its pages.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, LikeResponse};
