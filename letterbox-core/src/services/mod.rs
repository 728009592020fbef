//! Service layer - page controllers and the API client
//!
//! One controller per screen. Controllers share a [`PageContext`] holding
//! the API client, the session store and the front-end ports.

pub mod api;
mod guard;
mod home;
mod letters;
pub mod logging;
mod login;
mod my_page;
mod page;
mod register;
mod send_letter;

pub use api::LetterApi;
pub use guard::{AuthGuard, FailurePolicy, PageContext, AUTH_REQUIRED_MESSAGE};
pub use home::HomePage;
pub use letters::{
    LettersPage, EMPTY_INBOX_MESSAGE, LETTERS_LOAD_FAILED_MESSAGE, LETTER_LOAD_FAILED_MESSAGE,
};
pub use logging::{EntryPoint, LogEntry, LogEvent, LogFilter, LoggingService};
pub use login::{LoginPage, LOGIN_FAILED_MESSAGE, LOGIN_SUCCESS_MESSAGE};
pub use my_page::{MyPage, LOGOUT_MESSAGE, USER_LOAD_FAILED_MESSAGE};
pub use page::{LoadTicket, Loadable, PageState, Submission};
pub use register::{RegisterPage, REGISTER_FAILED_MESSAGE, REGISTER_SUCCESS_MESSAGE};
pub use send_letter::{SendLetterPage, SendOutcome, LETTER_SENT_MESSAGE, SEND_FAILED_MESSAGE};
