pub mod app;
pub mod modal;
pub mod particles;
pub mod slides;
pub mod theme;
pub mod window;
