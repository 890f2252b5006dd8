//! Panels drawn by the browser.

mod detail;
mod dialog;
mod footer;
mod list;

pub use detail::{DetailPanel, NO_SELECTION};
pub use dialog::{ConfirmDialog, DialogChoice, BULK_STAR_TITLE};
pub use footer::render_footer;
pub use list::{ListPanel, LIST_TITLE};
