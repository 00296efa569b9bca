pub mod health;
pub mod picker;
pub mod redirect;
pub mod signin;
pub mod whoami;
