pub mod autoplay;
pub mod components;
pub mod icons;
pub mod listeners;
pub mod modal;
