//! Social profile links and the platform → icon mapping.
//!
//! Icons are resolved through [`Platform::default_icon`] and [`Icon`]; there is
//! no lookup of arbitrary icon names at render time.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Platform a social link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Dribbble,
    Behance,
    Medium,
    DevTo,
    Email,
    Website,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 13] = [
        Platform::Github,
        Platform::Linkedin,
        Platform::Twitter,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Youtube,
        Platform::Dribbble,
        Platform::Behance,
        Platform::Medium,
        Platform::DevTo,
        Platform::Email,
        Platform::Website,
        Platform::Other,
    ];

    /// Stored identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Github => "github",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Youtube => "youtube",
            Platform::Dribbble => "dribbble",
            Platform::Behance => "behance",
            Platform::Medium => "medium",
            Platform::DevTo => "dev.to",
            Platform::Email => "email",
            Platform::Website => "website",
            Platform::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Github => "GitHub",
            Platform::Linkedin => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Youtube => "YouTube",
            Platform::Dribbble => "Dribbble",
            Platform::Behance => "Behance",
            Platform::Medium => "Medium",
            Platform::DevTo => "Dev.to",
            Platform::Email => "Email",
            Platform::Website => "Website",
            Platform::Other => "Other",
        }
    }

    pub fn default_icon(&self) -> Icon {
        match self {
            Platform::Github => Icon::Github,
            Platform::Linkedin => Icon::Linkedin,
            Platform::Twitter => Icon::Twitter,
            Platform::Instagram => Icon::Instagram,
            Platform::Facebook => Icon::Facebook,
            Platform::Youtube => Icon::Youtube,
            Platform::Dribbble => Icon::Dribbble,
            Platform::Behance => Icon::Palette,
            Platform::Medium => Icon::BookOpen,
            Platform::DevTo => Icon::Code,
            Platform::Email => Icon::Mail,
            Platform::Website => Icon::Globe,
            Platform::Other => Icon::Link,
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown platform: {}", s))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon identifier rendered next to a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Dribbble,
    Palette,
    BookOpen,
    Code,
    Mail,
    Globe,
    Link,
}

impl Icon {
    pub const ALL: [Icon; 13] = [
        Icon::Github,
        Icon::Linkedin,
        Icon::Twitter,
        Icon::Instagram,
        Icon::Facebook,
        Icon::Youtube,
        Icon::Dribbble,
        Icon::Palette,
        Icon::BookOpen,
        Icon::Code,
        Icon::Mail,
        Icon::Globe,
        Icon::Link,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Twitter => "twitter",
            Icon::Instagram => "instagram",
            Icon::Facebook => "facebook",
            Icon::Youtube => "youtube",
            Icon::Dribbble => "dribbble",
            Icon::Palette => "palette",
            Icon::BookOpen => "book-open",
            Icon::Code => "code",
            Icon::Mail => "mail",
            Icon::Globe => "globe",
            Icon::Link => "link",
        }
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown icon: {}", s))
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SocialLink {
    pub id: i64,
    pub platform: Platform,
    pub url: String,
    /// Explicit icon; `None` falls back to the platform default.
    pub icon: Option<Icon>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SocialLink {
    pub fn display_icon(&self) -> Icon {
        self.icon.unwrap_or_else(|| self.platform.default_icon())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSocialLink {
    pub platform: Platform,
    pub url: String,
    pub icon: Option<Icon>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parsing() {
        assert_eq!("github".parse::<Platform>(), Ok(Platform::Github));
        assert_eq!("Dev.to".parse::<Platform>(), Ok(Platform::DevTo));
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_every_platform_round_trips() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
        for icon in Icon::ALL {
            assert_eq!(icon.as_str().parse::<Icon>(), Ok(icon));
        }
    }

    #[test]
    fn test_display_icon_falls_back_to_platform() {
        let mut link = SocialLink {
            id: 1,
            platform: Platform::Email,
            url: "mailto:hello@example.com".to_string(),
            icon: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(link.display_icon(), Icon::Mail);

        link.icon = Some(Icon::Globe);
        assert_eq!(link.display_icon(), Icon::Globe);
    }

    #[test]
    fn test_default_icons() {
        assert_eq!(Platform::Behance.default_icon(), Icon::Palette);
        assert_eq!(Platform::Medium.default_icon(), Icon::BookOpen);
        assert_eq!(Platform::Other.default_icon(), Icon::Link);
    }
}
