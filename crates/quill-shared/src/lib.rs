//! # Quill Shared
//!
//! Wire types shared between the API server and the client library.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;

/// Categories offered by the client. The set is open: any non-empty
/// category is accepted by the server.
pub const SUGGESTED_CATEGORIES: [&str; 7] = [
    "Technology",
    "Lifestyle",
    "Career",
    "Finance",
    "Travel",
    "Food",
    "Other",
];
