//! Compile-time site configuration and profile record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no runtime configuration surface. Everything the page renders
//! or publishes in the document head comes from the two constants below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Site-wide settings shared by the metadata and theme modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Canonical origin, without a trailing slash.
    pub site_url: &'static str,
    /// Document language code.
    pub lang: &'static str,
    /// localStorage key for the theme preference.
    pub storage_key: &'static str,
    /// `theme-color` meta value while the light theme is active.
    pub theme_color_light: &'static str,
    /// `theme-color` meta value while the dark theme is active.
    pub theme_color_dark: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    site_url: "https://saisravan.netlify.app",
    lang: "en",
    storage_key: "theme",
    theme_color_light: "#f5f5f5",
    theme_color_dark: "#0a0a0a",
};

impl SiteConfig {
    /// Resolve a site-relative path against the canonical origin.
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.site_url.trim_end_matches('/');
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_owned()
        } else if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// Static personal and professional data rendered by the hero section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// First name used in the greeting and link labels.
    pub short_name: &'static str,
    pub role: &'static str,
    pub locality: &'static str,
    /// ISO 3166-1 alpha-2 country code.
    pub country: &'static str,
    pub bio: &'static str,
    pub employer: &'static str,
    /// One-line summary used for description and social preview tags.
    pub description: &'static str,
    pub email: &'static str,
    pub linkedin_url: &'static str,
    pub behance_url: &'static str,
    /// Identities published in the JSON-LD `sameAs` list. These are the
    /// canonical profile handles and may differ from the rendered links.
    pub same_as: &'static [&'static str],
    /// Site-relative path to the profile photo.
    pub image: &'static str,
    pub available: bool,
}

pub const PROFILE: Profile = Profile {
    name: "Sai Sravan Biyyapu",
    short_name: "Sai",
    role: "Product Designer",
    locality: "Bengaluru",
    country: "IN",
    bio: "Crafting human-centered, accessible, and beautiful digital experiences.",
    employer: "M2P Fintech",
    description: "A Product Designer creating digital experiences.",
    email: "sravanworld95@gmail.com",
    linkedin_url: "https://www.linkedin.com/in/sai-sravan-biyyapu/",
    behance_url: "https://www.behance.net/saisravan",
    same_as: &[
        "https://www.linkedin.com/in/saisravanbiyyapu",
        "https://dribbble.com/saisravanbiyyapu",
        "https://www.behance.net/saisravanbiyyapu",
        "mailto:saisravan.biyyapu@gmail.com",
    ],
    image: "/assets/profile.png",
    available: true,
};

impl Profile {
    /// `"{name} - {role}"`, used for the document title and image alt text.
    pub fn title(&self) -> String {
        format!("{} - {}", self.name, self.role)
    }

    pub fn site_name(&self) -> String {
        format!("{} Portfolio", self.name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Role line shown under the greeting, with the right indefinite article.
    pub fn role_line(&self) -> String {
        let article = match self.role.chars().next() {
            Some(c) if "AEIOUaeiou".contains(c) => "An",
            _ => "A",
        };
        format!("{article} {} based in {}", self.role, self.locality)
    }
}
