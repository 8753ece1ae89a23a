use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Content {
    pub hero: Hero,
    pub platform: Vec<Card>,
    pub slides: Vec<Card>,
    pub candidates: Vec<Candidate>,
    pub video: Video,
    pub vote_url: String,
    pub footer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub left_image: Image,
    pub right_image: Image,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub info: String,
    pub image: Image,
    pub bio: Vec<Segment>,
}

/// Running text with the occasional inline link.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Segment {
    Link { label: String, href: String },
    Text(String),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Video {
    pub url: String,
    pub note: String,
    pub transcript: Vec<Paragraph>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub highlight: bool,
}

impl Content {
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(SITE_JSON)
    }
}

/// Label shown in the corner of each slide, e.g. `3/9`.
pub fn slide_counter(index: usize, total: usize) -> String {
    format!("{}/{}", index + 1, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::SLIDE_COUNT;

    #[test]
    fn embedded_copy_parses() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.hero.title, "RYAN | REYANSH");
        assert_eq!(content.platform.len(), 4);
        assert_eq!(content.candidates.len(), 2);
        assert!(content.vote_url.starts_with("https://"));
        assert!(content.video.url.starts_with("https://"));
    }

    #[test]
    fn carousel_strip_matches_slide_count() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.slides.len(), SLIDE_COUNT);
        assert_eq!(slide_counter(0, content.slides.len()), "1/9");
        assert_eq!(slide_counter(8, content.slides.len()), "9/9");
    }

    #[test]
    fn bios_mix_text_and_links() {
        let content = Content::embedded().unwrap();
        let links: Vec<&str> = content
            .candidates
            .iter()
            .flat_map(|candidate| candidate.bio.iter())
            .filter_map(|segment| match segment {
                Segment::Link { href, .. } => Some(href.as_str()),
                Segment::Text(_) => None,
            })
            .collect();
        assert_eq!(links, ["https://yalelabs.io/", "https://coursetable.com/catalog"]);
    }

    #[test]
    fn only_one_transcript_paragraph_is_highlighted() {
        let content = Content::embedded().unwrap();
        let highlighted = content
            .video
            .transcript
            .iter()
            .filter(|paragraph| paragraph.highlight)
            .count();
        assert_eq!(highlighted, 1);
    }
}
