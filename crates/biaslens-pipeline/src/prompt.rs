//! Prompt construction for bias analysis

/// Instruction block used when the caller supplies no custom template.
///
/// The article text is appended after it, delimited by triple quotes, via
/// the same fallback path as any other template without a `{text}` marker.
pub const DEFAULT_PROMPT_TEMPLATE: &str = r#"## Task
You are a **media bias analyst**.

## Instructions
- Score the political bias of the text on a scale from **-1 (left)** to **1 (right)**.
- Use **0** for neutral.
- Respond **ONLY** with a valid JSON object.
- The JSON **must** contain the following keys:
  - `"bias"`
  - `"confidence"`
  - `"reasoning"`
- `"reasoning"` should be **1-3 sentences**.

## Text to analyze"#;

/// Placeholder marking the text insertion point in custom templates.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Render the final prompt from a template and the truncated article text.
///
/// A custom template containing `{text}` has the text substituted there;
/// any other template — including the default and the empty string — gets
/// the text appended after it inside triple-quote delimiters. The text is
/// therefore included under every template value.
pub fn build_prompt(template: Option<&str>, text: &str) -> String {
    let template = template.unwrap_or(DEFAULT_PROMPT_TEMPLATE);

    if template.contains(TEXT_PLACEHOLDER) {
        return template.replace(TEXT_PLACEHOLDER, text);
    }

    format!("{}\n\nText:\n\"\"\"\n{}\n\"\"\"", template, text)
}
