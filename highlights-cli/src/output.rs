use anyhow::Result;
use highlights_core::Highlight;

/// One highlight per line, as the original text
pub fn render_plain(highlights: &[Highlight]) -> String {
    highlights
        .iter()
        .map(Highlight::text)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(highlights: &[Highlight]) -> Result<String> {
    Ok(serde_json::to_string_pretty(highlights)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Highlight> {
        vec![
            Highlight::Record {
                index: 2,
                text: "Great food!".to_string(),
            },
            Highlight::Phrase {
                text: "great food".to_string(),
            },
        ]
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render_plain(&sample()), "Great food!\ngreat food");
    }

    #[test]
    fn test_render_plain_empty() {
        assert_eq!(render_plain(&[]), "");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kind"], "record");
        assert_eq!(value[0]["index"], 2);
        assert_eq!(value[1]["kind"], "phrase");
        assert_eq!(value[1]["text"], "great food");
    }
}
