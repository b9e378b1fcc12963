pub mod macros;

pub mod catalog;
pub mod command;
pub mod input;
pub mod modal;
pub mod particles;
pub mod presentation;
pub mod reanimate;
pub mod slides;

pub use presentation::{DeckSettings, Effects, Presentation};

pub const SOCKET_PATH: &str = "/tmp/servtalks.sock";
