mod menu;
mod results;
mod session;
mod state;

pub use menu::render_menu;
pub use results::render_results;
pub use session::{render_feedback, render_question};
pub use state::ViewError;
