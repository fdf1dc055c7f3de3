//! Interactive command-line shells
//!
//! Numbered menus over a sequential read-evaluate-print loop; one shell
//! per persistence backend, plus the login-history listing.

pub mod input;
pub mod logins;
pub mod pro;
pub mod simple;

pub use logins::run_logins;
pub use pro::run_pro_shell;
pub use simple::run_simple_shell;
