//! Static site content
//!
//! This is the "markup" the interactive layer runs against. A section that is
//! missing here behaves like a page without that element: navigation to it is
//! recorded but nothing new is shown.

use super::SectionId;

/// A card inside a section (welcome, subject, result, club, achievement)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl Card {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Content of one navigable section
#[derive(Debug, Clone)]
pub struct SectionContent {
    pub id: SectionId,
    pub title: String,
    pub intro: String,
    pub cards: Vec<Card>,
}

/// Hero stat that counts up to `target` when first shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroStat {
    pub label: String,
    pub target: u32,
}

/// Gallery image; `alt` doubles as the lightbox caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Everything the page renders
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub school_name: String,
    pub tagline: String,
    pub sections: Vec<SectionContent>,
    pub hero_stats: Vec<HeroStat>,
    pub gallery: Vec<GalleryImage>,
}

impl SiteContent {
    pub fn section(&self, id: SectionId) -> Option<&SectionContent> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn has_section(&self, id: SectionId) -> bool {
        self.section(id).is_some()
    }

    /// Number of cards revealed with the staggered entrance in a section
    pub fn card_count(&self, id: SectionId) -> usize {
        self.section(id).map_or(0, |s| s.cards.len())
    }

    /// Content for Zanaki Secondary School
    pub fn zanaki() -> Self {
        let sections = vec![
            SectionContent {
                id: SectionId::Home,
                title: "Welcome to Zanaki Secondary School".to_string(),
                intro: "A public girls' secondary school in Dar es Salaam, \
                        committed to academic excellence and character."
                    .to_string(),
                cards: vec![
                    Card::new("Quality Education", "Qualified teachers and a full O-Level and A-Level curriculum."),
                    Card::new("Safe Environment", "A disciplined, caring campus in the heart of the city."),
                    Card::new("Holistic Growth", "Clubs, sports and leadership programmes for every student."),
                ],
            },
            SectionContent {
                id: SectionId::About,
                title: "About Us".to_string(),
                intro: "Founded in 1952, Zanaki has educated generations of Tanzanian women \
                        leaders in science, public service and the arts."
                    .to_string(),
                cards: vec![
                    Card::new("Our Mission", "To provide quality education that empowers girls to reach their full potential."),
                    Card::new("Our Vision", "To be a centre of excellence in secondary education in Tanzania."),
                    Card::new("Our Values", "Discipline, integrity, hard work and respect."),
                ],
            },
            SectionContent {
                id: SectionId::Academics,
                title: "Academics".to_string(),
                intro: "Science, arts and business combinations from Form One to Form Six.".to_string(),
                cards: vec![
                    Card::new("Mathematics", "Basic and Advanced Mathematics."),
                    Card::new("Sciences", "Physics, Chemistry and Biology with practical laboratories."),
                    Card::new("Languages", "English, Kiswahili and French."),
                    Card::new("Humanities", "History, Geography and Civics."),
                    Card::new("Commerce", "Book-keeping and Commerce."),
                ],
            },
            SectionContent {
                id: SectionId::Results,
                title: "Examination Results".to_string(),
                intro: "Consistent performance in national examinations.".to_string(),
                cards: vec![
                    Card::new("CSEE", "Division I and II pass rates above the national average."),
                    Card::new("ACSEE", "Strong results across PCB, PCM, HGL and EGM combinations."),
                    Card::new("FTNA", "Steady improvement in Form Two national assessments."),
                ],
            },
            SectionContent {
                id: SectionId::Clubs,
                title: "Clubs & Activities".to_string(),
                intro: "Learning continues beyond the classroom.".to_string(),
                cards: vec![
                    Card::new("Debate Club", "English and Kiswahili debates with schools across the region."),
                    Card::new("Science Club", "Projects, fairs and young scientist competitions."),
                    Card::new("Environmental Club", "Tree planting and campus clean-up campaigns."),
                    Card::new("Sports", "Netball, volleyball, basketball and athletics."),
                ],
            },
            SectionContent {
                id: SectionId::Gallery,
                title: "Gallery".to_string(),
                intro: "Moments from school life. Select a photo to enlarge it.".to_string(),
                cards: Vec::new(),
            },
            SectionContent {
                id: SectionId::Contact,
                title: "Contact Us".to_string(),
                intro: "United Nations Road, Upanga, Dar es Salaam. \
                        Office hours: Monday to Friday, 07:30 to 15:30."
                    .to_string(),
                cards: Vec::new(),
            },
        ];

        let hero_stats = vec![
            HeroStat { label: "Students".to_string(), target: 1200 },
            HeroStat { label: "Teachers".to_string(), target: 75 },
            HeroStat { label: "Years of Excellence".to_string(), target: 70 },
            HeroStat { label: "Clubs".to_string(), target: 15 },
        ];

        let gallery = [
            ("images/assembly.jpg", "Morning assembly"),
            ("images/lab.jpg", "Chemistry practical in the science laboratory"),
            ("images/library.jpg", "Students in the school library"),
            ("images/sports.jpg", "Inter-house netball final"),
            ("images/graduation.jpg", "Form Six graduation ceremony"),
            ("images/debate.jpg", "Regional debate championship"),
        ]
        .iter()
        .map(|(src, alt)| GalleryImage {
            src: src.to_string(),
            alt: alt.to_string(),
        })
        .collect();

        Self {
            school_name: "Zanaki Secondary School".to_string(),
            tagline: "Education for Excellence".to_string(),
            sections,
            hero_stats,
            gallery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zanaki_has_every_section() {
        let content = SiteContent::zanaki();
        for id in SectionId::ALL {
            assert!(content.has_section(id), "missing {id}");
        }
    }

    #[test]
    fn test_default_content_has_no_sections() {
        let content = SiteContent::default();
        assert!(!content.has_section(SectionId::Home));
        assert_eq!(content.card_count(SectionId::Home), 0);
    }

    #[test]
    fn test_card_count() {
        let content = SiteContent::zanaki();
        assert_eq!(content.card_count(SectionId::Academics), 5);
        assert_eq!(content.card_count(SectionId::Contact), 0);
    }

    #[test]
    fn test_gallery_captions_not_empty() {
        let content = SiteContent::zanaki();
        assert!(!content.gallery.is_empty());
        assert!(content.gallery.iter().all(|img| !img.alt.is_empty()));
    }
}
