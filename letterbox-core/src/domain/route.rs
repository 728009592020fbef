//! Screens the navigator can move between

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Login,
    Register,
    MyPage,
    SendLetter,
    Letters,
}

impl Route {
    /// URL path of the screen in the web client
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::MyPage => "/mypage",
            Route::SendLetter => "/send-letter",
            Route::Letters => "/letters",
        }
    }

    /// Short name used in event logs
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Login => "login",
            Route::Register => "register",
            Route::MyPage => "mypage",
            Route::SendLetter => "send-letter",
            Route::Letters => "letters",
        }
    }

    /// Whether the screen needs a signed-in user
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::MyPage | Route::SendLetter | Route::Letters)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
