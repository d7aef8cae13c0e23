pub mod accessibility_toolbar;
pub mod footer;
pub mod header;
