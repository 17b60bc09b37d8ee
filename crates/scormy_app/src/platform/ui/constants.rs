use std::time::Duration;

pub const WINDOW_SIZE: [f32; 2] = [1100.0, 800.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [640.0, 480.0];

pub const SECTION_ABOUT: &str = "about";
pub const SECTION_PROCESS: &str = "process";
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_CONTACT: &str = "contact";

pub const CHAT_WIDTH: f32 = 320.0;
pub const CHAT_TRANSCRIPT_HEIGHT: f32 = 192.0;
pub const CHAT_MARGIN: f32 = 24.0;
pub const TYPE_SPEED: Duration = Duration::from_millis(45);

pub const CONTACT_EMAIL: &str = "mailto:kim@gracecedar.com";
