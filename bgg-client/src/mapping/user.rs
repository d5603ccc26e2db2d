use bgg_core::extract::string_value;
use bgg_core::{Document, User};

/// Map a `/user` response. The username is the one the caller asked for;
/// `None` when the response holds no `<user>` element.
pub fn user_details(doc: &Document, username: &str) -> Option<User> {
    doc.descendants("user").first().map(|user| User {
        username: username.to_string(),
        avatar: string_value(user.child("avatarlink"), Some("value"), ""),
    })
}
