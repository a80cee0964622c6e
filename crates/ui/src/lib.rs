pub mod app;
pub mod input;
pub mod views;
pub mod vm;

pub use app::QuizApp;
