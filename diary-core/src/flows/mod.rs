//! User flows
//!
//! Each flow ties the auth guard, the modal service and a diary service
//! together for one page interaction, and returns the route to navigate
//! to when the interaction ends somewhere else.

pub mod delete;
pub mod detail;
pub mod new_diary;

pub use delete::DeleteDiaryFlow;
pub use detail::DiaryEditor;
pub use new_diary::NewDiaryFlow;
