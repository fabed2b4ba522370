//! Services module
//!
//! Business logic services that coordinate between the UI layer and the repository.

pub mod auth;
pub mod auth_forms;
pub mod diaries;
pub mod events;
pub mod retrospects;
pub mod settings;

pub use auth::{AuthSession, Authenticator, User};
pub use auth_forms::{LoginDraft, SignupDraft, SignupFields};
pub use diaries::DiariesService;
pub use events::{ChangeEvent, ChangeNotifier, SubscriptionId};
pub use retrospects::RetrospectsService;
pub use settings::{AppSettings, AuthSettings, ListSettings, SettingsService};
