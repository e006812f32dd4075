//! Default ability rules
//!
//! Each rule is one independently-true clause:
//!
//! - **platform-admin**: platform admins manage every target
//! - **press-catalog**: presses and sub-brands are public
//! - **press-admin**: admins manage what is scoped to their press
//! - **press-editor**: editors read what is scoped to their press
//! - **public-read**: public publications are readable by everyone
//! - **press-admin-publish**: opt-in publishing for press admins

pub mod catalog;
pub mod platform_admin;
pub mod press_admin;
pub mod press_editor;
pub mod public_read;

pub use catalog::PressCatalogRule;
pub use platform_admin::PlatformAdminRule;
pub use press_admin::{PressAdminPublishRule, PressAdminRule};
pub use press_editor::PressEditorRule;
pub use public_read::PublicReadRule;
