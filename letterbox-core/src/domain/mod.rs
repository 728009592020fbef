//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O.

mod failure;
mod forms;
mod letter;
mod notice;
mod route;
mod session;
pub mod result;
pub mod timestamp;
mod user;

pub use failure::{Failure, FailureKind};
pub use forms::{
    LetterDraft, LoginForm, LoginRequest, RegisterForm, RegisterRequest, SendLetterRequest,
    LETTER_FIELDS_MESSAGE, LOGIN_FIELDS_MESSAGE, REGISTER_FIELDS_MESSAGE,
};
pub use letter::{Letter, LetterSummary};
pub use notice::{Notice, NoticeLevel};
pub use route::Route;
pub use session::SessionToken;
pub use user::User;
