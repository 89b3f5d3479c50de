pub mod auth;
pub mod client;
pub mod credentials;

pub use client::{sheet_url, SheetHandle, SheetsClient};
pub use credentials::ServiceAccountKey;
