//! View models for the lesson page template.

use askama::Template;
use lecons_content::domain::lesson::{Card, DialogueLine, Lesson, Section};

/// The rendered lesson page.
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct LessonPage {
    /// Page title and main heading.
    pub app_title: String,
    /// Sections in display order.
    pub sections: Vec<SectionView>,
}

/// One section of the page with its card carousel.
#[derive(Debug, Clone)]
pub struct SectionView {
    /// 1-based position, used for anchors and carousel ids.
    pub number: usize,
    /// Audio track id, `section-{index}-vocab` with a 0-based index.
    pub audio_id: String,
    /// Section heading.
    pub title: String,
    /// Text under the heading.
    pub description: String,
    /// One slide per renderable card.
    pub slides: Vec<SlideView>,
}

/// What a slide shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    /// Rendered from a dialogue card.
    Dialogue,
    /// Rendered from a language card.
    Language,
}

/// A single carousel slide.
#[derive(Debug, Clone)]
pub struct SlideView {
    /// Which card shape this slide renders.
    pub kind: SlideKind,
    /// Dialogue theme or lesson name.
    pub heading: String,
    /// Grammar rule; empty for dialogues.
    pub rule: String,
    /// Dialogue lines; empty for language cards.
    pub lines: Vec<DialogueLine>,
    /// Example sentences; empty for dialogues.
    pub examples: Vec<String>,
}

impl LessonPage {
    /// Build the page for a lesson.
    #[must_use]
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            app_title: lesson.app_title.clone(),
            sections: lesson
                .sections
                .iter()
                .enumerate()
                .map(|(index, section)| SectionView::new(index, section))
                .collect(),
        }
    }
}

impl SectionView {
    fn new(index: usize, section: &Section) -> Self {
        Self {
            number: index + 1,
            audio_id: format!("section-{index}-vocab"),
            title: section.title.clone(),
            description: section.description.clone(),
            slides: section.cards.iter().filter_map(SlideView::from_card).collect(),
        }
    }

    /// Anchor id of the section.
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("section-{}", self.number)
    }

    /// Element id of the section's carousel.
    #[must_use]
    pub fn carousel_id(&self) -> String {
        format!("cardsCarousel{}", self.number)
    }

    /// Prev/next controls only make sense with more than one slide.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.slides.len() > 1
    }
}

impl SlideView {
    /// Unknown cards have no slide.
    fn from_card(card: &Card) -> Option<Self> {
        match card {
            Card::Dialogue { theme, exchange } => Some(Self {
                kind: SlideKind::Dialogue,
                heading: theme.clone(),
                rule: String::new(),
                lines: exchange.clone(),
                examples: Vec::new(),
            }),
            Card::LanguageCard {
                lesson,
                rule,
                examples,
            } => Some(Self {
                kind: SlideKind::Language,
                heading: lesson.clone(),
                rule: rule.clone(),
                lines: Vec::new(),
                examples: examples.clone(),
            }),
            Card::Unknown => None,
        }
    }

    #[must_use]
    pub fn is_dialogue(&self) -> bool {
        self.kind == SlideKind::Dialogue
    }

    /// Badge label shown above the heading.
    #[must_use]
    pub fn badge(&self) -> &'static str {
        match self.kind {
            SlideKind::Dialogue => "Dialogue",
            SlideKind::Language => "Grammaire",
        }
    }

    /// CSS class for the card body.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            SlideKind::Dialogue => "carousel-card dialogue-card",
            SlideKind::Language => "carousel-card language-card",
        }
    }
}
