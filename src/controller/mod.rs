//! # Controller Module
//!
//! Thin view controllers sitting between the screens and the favorites
//! repository / catalog client.
//!
//! - [`DetailController`] - one movie: detail, recommendations and the
//!   favorite toggle
//! - [`ListController`] - the favorites list, re-read on every focus
//!
//! ## Lifecycle
//!
//! A controller is activated, possibly several times, and finally disposed.
//! Results that resolve after [`DetailController::dispose`] or
//! [`ListController::dispose`] are dropped instead of being applied. Dropping
//! an in-flight `activate` future is also safe; nothing is half applied.

mod detail;
mod list;

pub use detail::{DetailController, DetailError, DetailState};
pub use list::ListController;
