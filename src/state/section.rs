//! Section identifiers for the single-page layout

use crate::error::SiteError;
use std::fmt;
use std::str::FromStr;

/// One of the fixed, named page regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Academics,
    Results,
    Clubs,
    Gallery,
    Contact,
}

impl SectionId {
    /// All sections in navigation order
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Academics,
        SectionId::Results,
        SectionId::Clubs,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Identifier used by navigation controls
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Academics => "academics",
            Self::Results => "results",
            Self::Clubs => "clubs",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        }
    }

    /// Label shown on the nav bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Academics => "Academics",
            Self::Results => "Results",
            Self::Clubs => "Clubs",
            Self::Gallery => "Gallery",
            Self::Contact => "Contact",
        }
    }

    /// Position in navigation order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Section for a 1-based number key
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = (n as usize).checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn test_parse_round_trips_every_id() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>().unwrap(), section);
        }
    }

    #[test]
    fn test_parse_unknown_is_error() {
        let err = "library".parse::<SectionId>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownSection(ref s) if s == "library"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Home".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(SectionId::Contact.next(), SectionId::Home);
        assert_eq!(SectionId::Home.next(), SectionId::About);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(SectionId::Home.prev(), SectionId::Contact);
        assert_eq!(SectionId::Gallery.prev(), SectionId::Clubs);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(SectionId::from_number(1), Some(SectionId::Home));
        assert_eq!(SectionId::from_number(7), Some(SectionId::Contact));
        assert_eq!(SectionId::from_number(0), None);
        assert_eq!(SectionId::from_number(8), None);
    }
}
