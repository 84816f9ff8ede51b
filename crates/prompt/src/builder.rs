//! Prompt builder for rendering action templates.

use crate::types::{ActionKind, BuiltPrompt, FieldSet, PromptRequest};
use inkwell_core::{AppError, AppResult};
use handlebars::Handlebars;

const OUTLINE_TEMPLATE: &str = "Act as a Content Outliner. Create a 10-chapter ebook outline on the topic: \"{{topic}}\". Each chapter should include key subtopics, potential examples to include, and a clear takeaway. Format it as a clear, structured writing roadmap.";

const DRAFT_TEMPLATE: &str = "Act as a Drafting Assistant. Write the first draft of Chapter {{chapterNumber}} from the following outline point: \"{{outlinePoint}}\". The tone should be {{tone}}. Keep the content focused and easy to expand upon later. Provide a solid foundation for the chapter.";

const ENHANCE_TEMPLATE: &str = "Act as a Case Study Creator. Enhance the following chapter text by inserting two practical examples or mini case studies. The examples should make the concepts feel tangible, practical, and engaging for readers.

Chapter Text:
---
{{chapterText}}
---";

const POLISH_TEMPLATE: &str = "Act as a Clarity Editor. Rewrite this chapter draft to improve its flow, clarity, and style. Ensure it reads smoothly, keeps the reader engaged, and maintains a consistent tone. Eliminate jargon and simplify complex sentences.

Chapter Draft:
---
{{chapterText}}
---";

const DESIGN_TEMPLATE: &str = "Act as a Visual Content Strategist. For an ebook designed in {{designTool}}, suggest specific formatting ideas for the content. Include suggestions for headings (H1, H2, H3), callout box styles (for quotes or key stats), bullet list formatting, and chapter summary sections. Provide a conceptual guide to make the ebook look polished and professional.";

const TITLE_TEMPLATE: &str = "Act as a Title Generator. Generate 10 compelling ebook title and subtitle options for a book on the topic: \"{{topic}}\". The titles should be catchy, benefit-driven, and optimized for keyword relevance.";

/// Handlebars source for an action's prompt.
///
/// Every `{{slot}}` must name a field in the action's catalog entry.
pub fn template(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Outline => OUTLINE_TEMPLATE,
        ActionKind::Draft => DRAFT_TEMPLATE,
        ActionKind::Enhance => ENHANCE_TEMPLATE,
        ActionKind::Polish => POLISH_TEMPLATE,
        ActionKind::Design => DESIGN_TEMPLATE,
        ActionKind::Title => TITLE_TEMPLATE,
    }
}

/// Template registry holding one compiled template per action.
///
/// Rendering is strict: a slot without a value is an error rather than an
/// empty string. Values are inserted without escaping.
pub struct PromptBuilder {
    registry: Handlebars<'static>,
}

impl PromptBuilder {
    /// Compile the templates for all actions.
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);

        for action in ActionKind::ALL {
            registry
                .register_template_string(action.as_str(), template(action))
                .map_err(|e| {
                    AppError::Prompt(format!("Failed to register template '{}': {}", action, e))
                })?;
        }

        Ok(Self { registry })
    }

    /// Render the prompt for `action`, filling empty or missing slots with
    /// their fallback text.
    pub fn build(&self, action: ActionKind, fields: &FieldSet) -> AppResult<BuiltPrompt> {
        tracing::debug!("Building prompt: {}", action);

        let (resolved, fallbacks) = resolve_fields(action, fields);
        if !fallbacks.is_empty() {
            tracing::debug!("Using fallbacks for {}: {:?}", action, fallbacks);
        }

        let text = self
            .registry
            .render(action.as_str(), &resolved)
            .map_err(|e| AppError::Prompt(format!("Failed to render template '{}': {}", action, e)))?;

        Ok(BuiltPrompt {
            action,
            text,
            resolved,
            fallbacks,
        })
    }

    pub fn build_request(&self, request: &PromptRequest) -> AppResult<BuiltPrompt> {
        self.build(request.action, &request.fields)
    }
}

/// Build the prompt for an action.
///
/// # Example
/// ```
/// use inkwell_prompt::{build_prompt, ActionKind, FieldSet};
///
/// let fields = FieldSet::new().with("topic", "Urban beekeeping");
/// let built = build_prompt(ActionKind::Title, &fields).unwrap();
/// assert!(built.text.contains("topic: \"Urban beekeeping\""));
/// ```
pub fn build_prompt(action: ActionKind, fields: &FieldSet) -> AppResult<BuiltPrompt> {
    PromptBuilder::new()?.build(action, fields)
}

/// Build the prompt for an action given by name.
///
/// Fails with [`AppError::InvalidAction`] if the name is not one of the six actions.
pub fn build_prompt_for(action: &str, fields: &FieldSet) -> AppResult<BuiltPrompt> {
    let action: ActionKind = action.parse()?;
    build_prompt(action, fields)
}

/// Pick each slot's value: the supplied text verbatim, or the fallback.
fn resolve_fields(action: ActionKind, fields: &FieldSet) -> (FieldSet, Vec<String>) {
    let mut resolved = FieldSet::new();
    let mut fallbacks = Vec::new();

    for field in action.fields() {
        match fields.value(field.name) {
            Some(value) => resolved.set(field.name, value),
            None => {
                resolved.set(field.name, field.fallback);
                fallbacks.push(field.name.to_string());
            }
        }
    }

    (resolved, fallbacks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(action: ActionKind, fields: &FieldSet) -> BuiltPrompt {
        build_prompt(action, fields).unwrap()
    }

    #[test]
    fn test_every_template_uses_only_catalog_fields() {
        for action in ActionKind::ALL {
            let source = template(action);
            for slot in source.split("{{").skip(1) {
                let name = slot.split("}}").next().unwrap();
                assert!(
                    action.field(name).is_some(),
                    "{} template uses unknown slot {}",
                    action,
                    name
                );
            }
        }
    }

    #[test]
    fn test_all_actions_render_with_no_fields() {
        let empty = FieldSet::new();
        for action in ActionKind::ALL {
            let built = build(action, &empty);
            assert!(!built.text.contains("{{"), "{}: {}", action, built.text);
            assert!(!built.text.contains("}}"), "{}: {}", action, built.text);
            assert!(built.text.starts_with("Act as a "));
            assert_eq!(built.fallbacks.len(), action.fields().len());
            for field in action.fields() {
                assert!(built.text.contains(field.fallback), "{} missing {}", action, field.fallback);
            }
        }
    }

    #[test]
    fn test_empty_values_use_fallbacks() {
        let fields = FieldSet::new().with("topic", "");
        let built = build(ActionKind::Outline, &fields);
        assert!(built.text.contains("\"your chosen topic\""));
        assert_eq!(built.fallbacks, vec!["topic".to_string()]);
    }

    #[test]
    fn test_outline_exact_text() {
        let fields = FieldSet::new().with("topic", "Home composting");
        let built = build(ActionKind::Outline, &fields);
        assert_eq!(
            built.text,
            "Act as a Content Outliner. Create a 10-chapter ebook outline on the topic: \"Home composting\". Each chapter should include key subtopics, potential examples to include, and a clear takeaway. Format it as a clear, structured writing roadmap."
        );
        assert!(built.fallbacks.is_empty());
    }

    #[test]
    fn test_title_contains_quoted_topic() {
        let fields = FieldSet::new().with("topic", "Sustainable living for beginners");
        let built = build(ActionKind::Title, &fields);
        assert!(built
            .text
            .contains("topic: \"Sustainable living for beginners\""));
        assert!(built.text.contains("Generate 10 compelling ebook title"));
    }

    #[test]
    fn test_draft_without_fields() {
        let built = build(ActionKind::Draft, &FieldSet::new());
        assert!(built.text.contains("Chapter X"));
        assert!(built.text.contains("the provided outline point"));
        assert!(built.text.contains("The tone should be professional."));
    }

    #[test]
    fn test_draft_with_fields() {
        let fields = FieldSet::new()
            .with("chapterNumber", "4")
            .with("outlinePoint", "Composting in small apartments")
            .with("tone", "motivational");
        let built = build(ActionKind::Draft, &fields);
        assert!(built.text.contains("first draft of Chapter 4 from"));
        assert!(built.text.contains("point: \"Composting in small apartments\"."));
        assert!(built.text.contains("The tone should be motivational."));
    }

    #[test]
    fn test_enhance_delimits_chapter_text() {
        let fields = FieldSet::new().with("chapterText", "Hello world.");
        let built = build(ActionKind::Enhance, &fields);
        assert!(built.text.ends_with("Chapter Text:\n---\nHello world.\n---"));

        let block: Vec<&str> = built.text.split("\n---\n").collect();
        assert_eq!(block.len(), 2);
        assert_eq!(block[1], "Hello world.\n---");
    }

    #[test]
    fn test_polish_delimits_chapter_text() {
        let fields = FieldSet::new().with("chapterText", "Line one.\nLine two.");
        let built = build(ActionKind::Polish, &fields);
        assert!(built.text.starts_with("Act as a Clarity Editor."));
        assert!(built
            .text
            .ends_with("Chapter Draft:\n---\nLine one.\nLine two.\n---"));
    }

    #[test]
    fn test_design_names_tool() {
        let fields = FieldSet::new().with("designTool", "InDesign");
        let built = build(ActionKind::Design, &fields);
        assert!(built.text.contains("For an ebook designed in InDesign, suggest"));
        assert!(built.text.contains("headings (H1, H2, H3)"));
    }

    #[test]
    fn test_values_are_verbatim() {
        let tricky = "  {{topic}} <b>&amp;</b> \"quoted\" 'single'\n\ttabbed  ";
        for action in ActionKind::ALL {
            let mut fields = FieldSet::new();
            for field in action.fields() {
                fields.set(field.name, tricky);
            }
            let built = build(action, &fields);
            assert!(built.text.contains(tricky), "{} altered the value", action);
            assert!(built.fallbacks.is_empty());
        }
    }

    #[test]
    fn test_unrelated_fields_are_ignored() {
        let fields = FieldSet::new()
            .with("designTool", "Canva")
            .with("somethingElse", "ignored");
        let built = build(ActionKind::Outline, &fields);
        assert!(!built.text.contains("Canva"));
        assert!(!built.text.contains("ignored"));
        assert!(built.text.contains("your chosen topic"));
        assert_eq!(built.resolved.len(), 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = PromptBuilder::new().unwrap();
        let fields = FieldSet::sample();
        for action in ActionKind::ALL {
            let first = builder.build(action, &fields).unwrap();
            let second = builder.build(action, &fields).unwrap();
            let fresh = build(action, &fields);
            assert_eq!(first, second);
            assert_eq!(first, fresh);
        }
    }

    #[test]
    fn test_sample_fields_leave_only_tone_to_fallback() {
        let fields = FieldSet::sample();
        for action in ActionKind::ALL {
            let built = build(action, &fields);
            if action == ActionKind::Draft {
                assert_eq!(built.fallbacks, vec!["tone".to_string()]);
                assert!(built.text.contains("professional"));
            } else {
                assert!(built.fallbacks.is_empty(), "{} used fallbacks", action);
            }
        }
    }

    #[test]
    fn test_build_prompt_for_unknown_action() {
        let result = build_prompt_for("summarize", &FieldSet::new());
        assert!(matches!(result, Err(AppError::InvalidAction(_))));
    }

    #[test]
    fn test_build_request() {
        let builder = PromptBuilder::new().unwrap();
        let request = PromptRequest::new(
            ActionKind::Design,
            FieldSet::new().with("designTool", "Word"),
        );
        let built = builder.build_request(&request).unwrap();
        assert_eq!(built.resolved.get("designTool"), Some("Word"));
    }

    #[test]
    fn test_build_prompt_for_known_action() {
        let built = build_prompt_for("title", &FieldSet::new()).unwrap();
        assert_eq!(built.action, ActionKind::Title);
    }
}
