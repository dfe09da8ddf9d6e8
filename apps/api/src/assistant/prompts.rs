// Prompt templates and model choices for the assistant endpoints.
// Placeholders in `{braces}` are substituted before sending.

/// Conversational answers and long-form writing.
pub const CHAT_MODEL: &str = "gpt-4";
/// Resume/role analysis; cheaper model, same single-call shape.
pub const ANALYSIS_MODEL: &str = "gpt-4o-mini";

pub const CHAT_TEMPERATURE: f64 = 0.8;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

pub const PORTFOLIO_PROMPT_TEMPLATE: &str = "Generate professional portfolio: {user_input}";

pub const COVER_LETTER_PROMPT_TEMPLATE: &str =
    "Generate a professional cover letter: {user_input}";

/// Replace: {resume_text}, {job_description}
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"Resume: {resume_text}
Job Description: {job_description}
Suggest missing skills, improvements, and advice for better alignment."#;

/// Replace: {user_skills}, {target_role}
pub const SKILL_GAP_PROMPT_TEMPLATE: &str = r#"Candidate skills: {user_skills}
Target role: {target_role}
Suggest missing skills, courses, projects, or certifications to achieve this role."#;

/// Heading prepended by the resume generator.
pub const RESUME_HEADING_TEMPLATE: &str = "ATS-friendly Resume for {title}";

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Inserted values are never rescanned, so user text containing `{...}` is kept
/// verbatim. Unknown placeholders are left as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match substituted {
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
    fn test_fill_template_substitutes_every_placeholder() {
        let filled = fill_template("{a} and {b}, then {a}", &[("a", "x"), ("b", "y")]);
        assert_eq!(filled, "x and y, then x");
    }

    #[test]
    fn test_fill_template_does_not_rescan_inserted_values() {
        let filled = fill_template("{first}|{second}", &[("first", "{second}"), ("second", "B")]);
        assert_eq!(filled, "{second}|B");
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unclosed_braces() {
        assert_eq!(fill_template("{unknown} {x", &[("x", "1")]), "{unknown} {x");
        assert_eq!(fill_template("{{x}}", &[("x", "1")]), "{1}");
    }
}
