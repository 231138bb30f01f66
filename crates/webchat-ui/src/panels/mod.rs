pub mod chat;
pub mod login;
pub mod signup;

pub use chat::{chat_panel, ChatAction};
pub use login::{login_panel, LoginAction};
pub use signup::{signup_panel, SignupAction};
