//! Landing screen

use crate::domain::Route;

use super::guard::PageContext;

pub const TITLE: &str = "Letter Service";
pub const TAGLINE: &str =
    "A place to exchange warm messages. Share love and heartfelt words with Letter Service.";

pub struct HomePage {
    ctx: PageContext,
}

impl HomePage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }

    pub fn tagline(&self) -> &'static str {
        TAGLINE
    }

    pub fn open_login(&self) {
        self.ctx.navigate(Route::Login);
    }
}
