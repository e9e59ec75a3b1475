pub mod blocks;
pub mod frontmatter;
pub mod splitter;

use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Presentation {
    pub meta: PresentationMeta,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PresentationMeta {
    pub title: Option<String>,
    pub theme: Option<String>,
    pub transition: Option<String>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Slide {
    #[allow(dead_code)]
    pub directives: Vec<Directive>,
    pub blocks: Vec<Block>,
    pub layout: Layout,
    /// Length in seconds of the timed media segment attached with `@media`.
    pub media: Option<f32>,
    #[allow(dead_code)]
    pub raw_source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    List { ordered: bool, items: Vec<String> },
    Quote { text: String },
    Code { language: Option<String>, code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Title,
    Section,
    Quote,
    Content,
}

impl Presentation {
    /// The designated media slide: the first one carrying `@media`.
    pub fn media_slide(&self) -> Option<(usize, f32)> {
        self.slides
            .iter()
            .enumerate()
            .find_map(|(i, s)| s.media.map(|d| (i, d)))
    }
}

pub fn parse(content: &str) -> Presentation {
    let (meta, body) = frontmatter::extract(content);
    let slides = splitter::split(&body)
        .into_iter()
        .map(|raw| {
            let (directives, content) = blocks::extract_directives(&raw);
            let blocks = blocks::parse(&content);
            let layout = classify_layout(&directives, &blocks);
            let media = media_duration(&directives);
            Slide {
                directives,
                blocks,
                layout,
                media,
                raw_source: raw,
            }
        })
        .collect();
    Presentation { meta, slides }
}

fn media_duration(directives: &[Directive]) -> Option<f32> {
    let d = directives.iter().find(|d| d.name == "media")?;
    let seconds = d.value.trim_end_matches('s').trim();
    match seconds.parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => {
            log::warn!("Ignoring @media with invalid duration: {:?}", d.value);
            None
        }
    }
}

fn classify_layout(directives: &[Directive], blocks: &[Block]) -> Layout {
    if let Some(d) = directives.iter().find(|d| d.name == "layout") {
        return match d.value.as_str() {
            "title" => Layout::Title,
            "section" => Layout::Section,
            "quote" => Layout::Quote,
            _ => Layout::Content,
        };
    }

    let headings: Vec<u8> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        })
        .collect();
    let quotes = blocks
        .iter()
        .filter(|b| matches!(b, Block::Quote { .. }))
        .count();
    let structured = blocks
        .iter()
        .filter(|b| matches!(b, Block::List { .. } | Block::Code { .. }))
        .count();
    let others = blocks.len() - headings.len();

    // Lone heading: section divider
    if headings.len() == 1 && others == 0 {
        return Layout::Section;
    }

    // H1 with a subtitle or short tagline
    if headings.first() == Some(&1) && blocks.len() == 2 {
        match &blocks[1] {
            Block::Heading { level: 2, .. } => return Layout::Title,
            Block::Paragraph { text } if text.len() < 120 => return Layout::Title,
            _ => {}
        }
    }

    if quotes > 0 && structured == 0 {
        return Layout::Quote;
    }

    Layout::Content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_deck_parses() {
        let content = include_str!("../../../../sample-presentations/karate-journey.md");
        let pres = parse(content);
        assert_eq!(pres.meta.title.as_deref(), Some("Karate Journey"));
        assert_eq!(pres.meta.theme.as_deref(), Some("dark"));
        assert!(
            pres.slides.len() >= 8,
            "Expected at least 8 slides, got {}",
            pres.slides.len()
        );
        assert_eq!(pres.slides[0].layout, Layout::Title);
        let (index, duration) = pres.media_slide().expect("sample has a media slide");
        assert!(index > 0);
        assert!(duration > 2.5);
    }

    #[test]
    fn test_title_layout() {
        let pres = parse("# Hello World\n\nA subtitle here");
        assert_eq!(pres.slides.len(), 1);
        assert_eq!(pres.slides[0].layout, Layout::Title);
    }

    #[test]
    fn test_section_layout() {
        let pres = parse("## Part One");
        assert_eq!(pres.slides[0].layout, Layout::Section);
    }

    #[test]
    fn test_quote_layout() {
        let pres = parse("> Something wise\n\n-- Author");
        assert_eq!(pres.slides[0].layout, Layout::Quote);
    }

    #[test]
    fn test_content_layout() {
        let pres = parse("# Key Points\n\n- First\n- Second\n\nClosing words");
        assert_eq!(pres.slides[0].layout, Layout::Content);
    }

    #[test]
    fn test_layout_directive_wins() {
        let pres = parse("@layout: section\n\n# Big\n\nwith a lot of text under it");
        assert_eq!(pres.slides[0].layout, Layout::Section);
        assert_eq!(pres.slides[0].directives.len(), 1);
    }

    #[test]
    fn test_media_directive() {
        let pres = parse("# Intro\n\n---\n\n@media: 14.5s\n# Kata\n\nWatch the form");
        assert_eq!(pres.slides.len(), 2);
        assert_eq!(pres.slides[0].media, None);
        assert_eq!(pres.slides[1].media, Some(14.5));
        assert_eq!(pres.media_slide(), Some((1, 14.5)));
    }

    #[test]
    fn test_invalid_media_is_ignored() {
        let pres = parse("@media: soon\n# Kata");
        assert_eq!(pres.slides[0].media, None);
        assert_eq!(pres.media_slide(), None);
    }

    #[test]
    fn test_empty_document_has_no_slides() {
        assert!(parse("\n\n   \n").slides.is_empty());
    }
}
