//! Floating accessibility toolbar: a trigger button, a dialog panel with the
//! display controls and a polite live region for change announcements.

pub mod controls;
pub mod focus;
pub mod hook;
pub mod view;


pub use hook::{ToolbarHandle, use_accessibility_toolbar};
pub use view::{AccessibilityToolbar, PANEL_ID, Props, TRIGGER_ID};
