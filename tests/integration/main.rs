mod helpers;

mod signin_test;
mod signout_test;
