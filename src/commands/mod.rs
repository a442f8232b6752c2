//! Command implementations for the facegate CLI

mod check;
mod faces;
mod session;
mod today;

pub use check::check;
pub use faces::faces;
pub use session::session;
pub use today::today;
