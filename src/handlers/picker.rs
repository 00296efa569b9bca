use url::form_urlencoded;

use crate::domain::registry::UserRegistry;
use crate::domain::types::{OVERRIDE_USER_ID_KEY, RETURN_URL_KEY};

/// Renderer for the interactive user-picker page.
///
/// The page itself is an external collaborator of the core sign-in flow;
/// hosts embed their own by swapping this implementation out via
/// `StandinOptions::picker`.
pub trait UserPicker: Send + Sync {
    fn render(
        &self,
        registry: &UserRegistry,
        sign_in_uri: &str,
        return_url: Option<&str>,
    ) -> String;
}

/// Default renderer: an unstyled list of sign-in links, one per user, each
/// carrying the override id and the percent-encoded return URL.
#[derive(Debug, Clone, Default)]
pub struct HtmlUserPicker;

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

impl UserPicker for HtmlUserPicker {
    fn render(
        &self,
        registry: &UserRegistry,
        sign_in_uri: &str,
        return_url: Option<&str>,
    ) -> String {
        let encoded_return = encode(return_url.unwrap_or(""));

        let mut items = String::new();
        for user in registry.users() {
            items.push_str(&format!(
                r#"<li><a href="{sign_in_uri}?{OVERRIDE_USER_ID_KEY}={id}&{RETURN_URL_KEY}={encoded_return}">{name}</a></li>"#,
                id = encode(&user.id),
                name = user.name,
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="UTF-8">
        <title>Select a user</title>
    </head>
    <body>
        <h3>Please select a user to continue authentication.</h3>
        <ul>{items}</ul>
    </body>
</html>"#
        )
    }
}
