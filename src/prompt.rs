use thiserror::Error;

pub const PROBLEM_SLOT: &str = "problem";
pub const THEME_SLOT: &str = "theme";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that rewrites math word problems by changing only the context \
to match a student's interest. Do not add introductions, phrases like 'Sure!', 'Let's reframe...', \
'Imagine', or any additional context. Do not add formatting (like bold or markdown). \
Return only the rewritten problem sentence. Keep the difficulty and structure the same.";

pub const DEFAULT_USER_PROMPT: &str = "Rewrite this math problem using the theme '{theme}'. \
Only return the final rewritten sentence, and nothing else.\n\nOriginal: {problem}\nRewritten:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("user prompt template is missing the {{{0}}} slot")]
    MissingSlot(&'static str),
}

/// The pair of instructions sent to the completion capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    pub system: String,
    pub user: String,
}

/// System and user templates with `{problem}` and `{theme}` slots.
///
/// The user template must reference both slots so that every rendered user
/// instruction carries the caller's problem and theme.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system: String,
    user: String,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Result<Self, TemplateError> {
        let system = system.into();
        let user = user.into();

        for slot in [PROBLEM_SLOT, THEME_SLOT] {
            if !user.contains(&format!("{{{slot}}}")) {
                return Err(TemplateError::MissingSlot(slot));
            }
        }

        Ok(Self { system, user })
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            system: DEFAULT_SYSTEM_PROMPT.to_string(),
            user: DEFAULT_USER_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    template: PromptTemplate,
}

impl PromptBuilder {
    pub fn new(template: PromptTemplate) -> Self {
        Self { template }
    }

    pub fn build(&self, problem: &str, theme: &str) -> Instructions {
        let slots = [(PROBLEM_SLOT, problem), (THEME_SLOT, theme)];
        Instructions {
            system: render(&self.template.system, &slots),
            user: render(&self.template.user, &slots),
        }
    }
}

/// Single-pass slot substitution. Inserted values are never re-scanned, and
/// unknown `{name}` sequences or stray braces are copied through as-is.
fn render(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            slots
                .iter()
                .find(|(slot, _)| *slot == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_instruction_contains_problem_and_theme() {
        let builder = PromptBuilder::default();
        let problem = "Tom has 5 apples and gives 2 away.";

        let instructions = builder.build(problem, "basketball");

        assert!(instructions.user.contains(problem));
        assert!(instructions.user.contains("basketball"));
        assert!(instructions.user.ends_with("Rewritten:"));
    }

    #[test]
    fn system_instruction_carries_constraints_only() {
        let instructions = PromptBuilder::default().build("1 + 1", "space");

        assert_eq!(instructions.system, DEFAULT_SYSTEM_PROMPT);
        assert!(!instructions.system.contains("space"));
    }

    #[test]
    fn inputs_pass_through_unescaped() {
        let problem = "A \"quoted\" problem with 'apostrophes' & <tags>\nand a newline";
        let instructions = PromptBuilder::default().build(problem, "dinos & dragons");

        assert!(instructions.user.contains(problem));
        assert!(instructions.user.contains("dinos & dragons"));
    }

    #[test]
    fn slot_values_are_not_re_expanded() {
        let template = PromptTemplate::new("sys", "{problem} / {theme}").unwrap();
        let builder = PromptBuilder::new(template);

        let instructions = builder.build("uses {theme} literally", "chess");

        assert_eq!(instructions.user, "uses {theme} literally / chess");
    }

    #[test]
    fn unknown_slots_and_stray_braces_are_kept() {
        let template = PromptTemplate::new("{grade} {", "{ {problem}} {theme} }").unwrap();
        let instructions = PromptBuilder::new(template).build("x", "y");

        assert_eq!(instructions.system, "{grade} {");
        assert_eq!(instructions.user, "{ x} y }");
    }

    #[test]
    fn system_template_may_use_slots() {
        let template = PromptTemplate::new("Theme is {theme}.", "{problem} {theme}").unwrap();
        let instructions = PromptBuilder::new(template).build("p", "music");

        assert_eq!(instructions.system, "Theme is music.");
    }

    #[test]
    fn user_template_without_slots_is_rejected() {
        assert_eq!(
            PromptTemplate::new("sys", "only {theme}").unwrap_err(),
            TemplateError::MissingSlot(PROBLEM_SLOT)
        );
        assert_eq!(
            PromptTemplate::new("sys", "only {problem}").unwrap_err(),
            TemplateError::MissingSlot(THEME_SLOT)
        );
    }

    #[test]
    fn default_template_is_valid() {
        assert!(PromptTemplate::new(DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_PROMPT).is_ok());
    }
}
