//! Build-time settings: the email service identifiers, animation timings
//! and the fixed site theme.

/// EmailJS REST endpoint used for the booking enquiry form.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAILJS_SERVICE_ID: &str = "service_0669rfq";
pub const EMAILJS_TEMPLATE_ID: &str = "template_agmgezm";

/// Public key injected by the hosting platform at build time, falling back
/// to the site's published key.
pub fn get_email_public_key() -> &'static str {
    option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("MX0lyxIK9DsurlErk")
}

/// Fraction of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.2;

pub const HERO_LOAD_DELAY_MS: u32 = 100;
pub const TYPING_INTERVAL_MS: u32 = 30;
pub const ROLE_INTERVAL_MS: u32 = 3_000;
pub const BACKGROUND_INTERVAL_MS: u32 = 5_000;

pub const GALLERY_CAROUSEL_DELAY_MS: u32 = 2_000;
pub const GALLERY_CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const CLIENT_CAROUSEL_INTERVAL_MS: u32 = 3_000;
pub const TESTIMONIAL_INTERVAL_MS: u32 = 6_000;
pub const LOGO_MARQUEE_STEP_MS: u32 = 30;

pub const SOCIAL_OVERLAY_DELAY_MS: u32 = 2_000;
pub const TOAST_LIFETIME_MS: u32 = 5_000;

pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Percentage of the page scrolled before the booking popup shows up.
pub const POPUP_SCROLL_PERCENT: f64 = 60.0;

pub const WHATSAPP_URL: &str = "https://wa.me/+917996123999";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/mc_anushavarri/";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@MCANUSHAVARRI";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/emceeanushavarri/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
}

impl Theme {
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
        }
    }
}

/// The site ships a single dark look; there is no runtime switch.
pub const SITE_THEME: Theme = Theme::Dark;

/// Strips any leftover light-mode class from `<html>` and pins the site theme.
pub fn apply_theme() {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_1("light-mode");
    let _ = classes.add_1(SITE_THEME.css_class());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_is_pinned_to_dark() {
        assert_eq!(SITE_THEME, Theme::Dark);
        assert_eq!(SITE_THEME.css_class(), "dark");
    }

    #[test]
    fn reveal_threshold_matches_section_fade() {
        assert!((REVEAL_THRESHOLD - 0.2).abs() < f64::EPSILON);
    }
}
