use axum_test::{TestServer, TestServerConfig};

use standin::config::StandinOptions;
use standin::domain::types::User;
use standin::router::build_router;

/// Two-user fixture: one bearer-capable admin, one session-only user.
pub fn test_options() -> StandinOptions {
    StandinOptions::new()
        .user(
            User::new("u1", "User 1")
                .access_token("tok-1")
                .claim("role", "admin"),
        )
        .user(User::new("u2", "User 2").claim("role", "viewer"))
}

/// Server with a browser-like cookie jar, so session state carries across
/// requests the way it would for a real caller.
pub fn test_server(options: StandinOptions) -> TestServer {
    let state = options.build().unwrap();
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(build_router(state), config).unwrap()
}

pub const SIGN_IN: &str = "/standin/sign-in";
pub const SIGN_OUT: &str = "/standin/sign-out";
