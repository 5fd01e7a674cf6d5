pub mod team;
mod toasts;

pub use team::team_page;
pub use toasts::toasts;
