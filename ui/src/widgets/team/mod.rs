//! Team roster page.
//!
//! - `page`: header, loading state and composition
//! - `form`: add-member form
//! - `tabs`: officials/volunteers tab strip
//! - `cards`: member cards and the card grid

mod cards;
mod form;
mod page;
mod tabs;

pub use cards::{member_card, member_grid};
pub use form::member_form;
pub use page::team_page;
pub use tabs::{tab_title, team_tabs};
