pub mod bearer;
pub mod signin;
