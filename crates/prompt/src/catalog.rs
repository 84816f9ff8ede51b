//! Action catalog: display text and form fields for each action.

use crate::types::ActionKind;
use serde::Serialize;

/// A named input an action reads from its [`FieldSet`](crate::FieldSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key looked up in the field set
    pub name: &'static str,

    /// Form label
    pub label: &'static str,

    /// Example value shown in an empty input
    pub placeholder: &'static str,

    /// Text substituted into the prompt when the field is absent or empty
    pub fallback: &'static str,

    /// Whether the input takes multiple lines of text
    pub multiline: bool,
}

/// Display metadata for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionDetails {
    pub action: ActionKind,

    /// Panel heading
    pub title: &'static str,

    /// Panel description
    pub description: &'static str,

    /// Short navigation label
    pub label: &'static str,

    /// Navigation one-liner
    pub summary: &'static str,

    /// Form fields, in display order
    pub fields: &'static [FieldSpec],
}

const TOPIC: FieldSpec = FieldSpec {
    name: "topic",
    label: "Ebook Topic",
    placeholder: "e.g., The Future of Renewable Energy",
    fallback: "your chosen topic",
    multiline: true,
};

const CHAPTER_NUMBER: FieldSpec = FieldSpec {
    name: "chapterNumber",
    label: "Chapter Number",
    placeholder: "e.g., 3",
    fallback: "X",
    multiline: false,
};

const OUTLINE_POINT: FieldSpec = FieldSpec {
    name: "outlinePoint",
    label: "Outline Point",
    placeholder: "e.g., Key Innovations in Solar Panel Technology",
    fallback: "the provided outline point",
    multiline: true,
};

const TONE: FieldSpec = FieldSpec {
    name: "tone",
    label: "Tone",
    placeholder: "e.g., casual, professional, motivational",
    fallback: "professional",
    multiline: false,
};

const CHAPTER_TEXT: FieldSpec = FieldSpec {
    name: "chapterText",
    label: "Chapter Text",
    placeholder: "Paste your draft chapter here...",
    fallback: "your chapter text",
    multiline: true,
};

const DESIGN_TOOL: FieldSpec = FieldSpec {
    name: "designTool",
    label: "Design Tool",
    placeholder: "e.g., Canva, Word, InDesign",
    fallback: "a design tool",
    multiline: false,
};

static OUTLINE: ActionDetails = ActionDetails {
    action: ActionKind::Outline,
    title: "Outline Your Ebook",
    description: "Provide a topic and let the AI generate a comprehensive 10-chapter outline.",
    label: "Outline Ebook",
    summary: "Create a 10-chapter writing roadmap.",
    fields: &[TOPIC],
};

static DRAFT: ActionDetails = ActionDetails {
    action: ActionKind::Draft,
    title: "Draft a Chapter",
    description: "Input a chapter number, an outline point, and a desired tone to get a first draft.",
    label: "Draft Chapter",
    summary: "Write a draft for a specific chapter.",
    fields: &[CHAPTER_NUMBER, OUTLINE_POINT, TONE],
};

static ENHANCE: ActionDetails = ActionDetails {
    action: ActionKind::Enhance,
    title: "Enhance With Stories",
    description: "Paste your chapter text to enrich it with relevant examples and case studies.",
    label: "Add Stories",
    summary: "Insert case studies and examples.",
    fields: &[CHAPTER_TEXT],
};

static POLISH: ActionDetails = ActionDetails {
    action: ActionKind::Polish,
    title: "Polish for Flow and Style",
    description: "Submit your draft to improve clarity, engagement, and consistency.",
    label: "Polish Flow",
    summary: "Rewrite a draft for clarity and style.",
    fields: &[CHAPTER_TEXT],
};

static DESIGN: ActionDetails = ActionDetails {
    action: ActionKind::Design,
    title: "Get Formatting Ideas",
    description: "Specify your design tool to receive tailored formatting suggestions for a professional look.",
    label: "Format Ideas",
    summary: "Get suggestions for ebook design.",
    fields: &[DESIGN_TOOL],
};

static TITLE: ActionDetails = ActionDetails {
    action: ActionKind::Title,
    title: "Craft a Marketable Title",
    description: "Enter your ebook's topic to generate 10 catchy and effective title options.",
    label: "Craft Title",
    summary: "Generate marketable title options.",
    fields: &[TOPIC],
};

impl ActionKind {
    /// Display metadata and form fields for this action.
    pub fn details(&self) -> &'static ActionDetails {
        match self {
            Self::Outline => &OUTLINE,
            Self::Draft => &DRAFT,
            Self::Enhance => &ENHANCE,
            Self::Polish => &POLISH,
            Self::Design => &DESIGN,
            Self::Title => &TITLE,
        }
    }

    /// Form fields for this action, in display order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.details().fields
    }

    /// Look up a field of this action by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }
}

/// The full catalog, in navigation order.
pub fn catalog() -> impl Iterator<Item = &'static ActionDetails> {
    ActionKind::ALL.into_iter().map(|action| action.details())
}
