pub mod app;
pub mod boot;
pub mod config;
pub mod contact;
pub mod content;
pub mod field;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod splash;
pub mod style;
pub mod theme;
pub mod work;

pub use app::Message;
