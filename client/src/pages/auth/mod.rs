//! Signed-out screens: login, signup, password recovery, role selection.

pub mod forgot_password;
pub mod login;
pub mod role_selection;
pub mod signup;
