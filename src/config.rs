use crate::reveal::{RevealOptions, RootMargin};

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> Option<&'static str> {
    option_env!("FORM_ENDPOINT")  // Local-only success path unless set at build time
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> Option<&'static str> {
    Some(option_env!("FORM_ENDPOINT").unwrap_or("https://formspree.io/f/xanpekjl"))  // Production endpoint
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> log::Level {
    log::Level::Info
}

/// How long the confirmation overlay stays up before it starts leaving.
pub const CONFIRMATION_DISMISS_MS: u32 = 3_000;
/// Length of the overlay's leave animation; it is removed once this elapses.
pub const CONFIRMATION_LEAVE_MS: u32 = 200;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_SELECTOR: &str = ".strategy-card, .stat-item, .info-card, .investor-card";

pub fn reveal_options() -> RevealOptions {
    RevealOptions {
        threshold: REVEAL_THRESHOLD,
        root_margin: RootMargin { top: 0, right: 0, bottom: -50, left: 0 },
    }
}

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const NAV_SCROLLED_AFTER_PX: f64 = 100.0;
pub const NAV_OFFSET_PX: i32 = 80;

pub const FAILURE_NOTICE: &str = "Submission failed. Please try again or email us directly.";

pub const LINKEDIN_COMPANY_URL: &str =
    "https://www.linkedin.com/company/prytaneum-partners/?viewAsMember=true";

pub const LINKEDIN_POSTS: &[&str] = &[
    "https://www.linkedin.com/posts/prytaneum-partners_activity-7378805658780930048-_bo9?utm_source=share&utm_medium=member_desktop&rcm=ACoAACSdvxYB_oO5QZzqutM6EFu_vHX-AsZmsVo",
];
