pub mod use_media;
pub mod use_system_theme_listener;

pub use use_media::use_is_mobile;
pub use use_media::use_reduced_motion;
pub use use_system_theme_listener::use_system_theme_listener;
