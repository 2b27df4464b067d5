use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

const LIST_MARKER: &str = "- ";

/// A rendered unit of a rule description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Block {
    /// Every non-empty line started with `"- "`; items have the marker removed.
    List(Vec<String>),
    /// Raw block text, line breaks preserved.
    Paragraph(String),
}

/// Split description text into blocks separated by blank lines.
///
/// Empty blocks (from leading or trailing blank lines) are kept as empty
/// paragraphs.
#[must_use]
pub fn split_blocks(text: &str) -> Vec<Block> {
    BLANK_LINE.split(text).map(classify).collect()
}

fn classify(block: &str) -> Block {
    let lines: Vec<&str> = block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let is_list = !lines.is_empty() && lines.iter().all(|line| line.starts_with(LIST_MARKER));
    if is_list {
        Block::List(
            lines
                .iter()
                .map(|line| line[LIST_MARKER.len()..].to_string())
                .collect(),
        )
    } else {
        Block::Paragraph(block.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_then_paragraph() {
        assert_eq!(
            split_blocks("- uno\n- dos\n\nPárrafo simple"),
            vec![
                Block::List(vec!["uno".into(), "dos".into()]),
                Block::Paragraph("Párrafo simple".into()),
            ]
        );
    }

    #[test]
    fn mixed_lines_stay_a_paragraph() {
        let text = "Prohibido:\n- robar\n- mentir";
        assert_eq!(split_blocks(text), vec![Block::Paragraph(text.into())]);
    }

    #[test]
    fn indented_items_are_trimmed() {
        assert_eq!(
            split_blocks("   - uno  \n\t- dos"),
            vec![Block::List(vec!["uno".into(), "dos".into()])]
        );
    }

    #[test]
    fn whitespace_only_separator_lines_split_blocks() {
        let blocks = split_blocks("Primero\n   \t\n\nSegundo");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("Primero".into()),
                Block::Paragraph("Segundo".into()),
            ]
        );
    }

    #[test]
    fn leading_and_trailing_blank_runs_yield_empty_paragraphs() {
        assert_eq!(
            split_blocks("\n\nTexto\n\n"),
            vec![
                Block::Paragraph(String::new()),
                Block::Paragraph("Texto".into()),
                Block::Paragraph(String::new()),
            ]
        );
    }

    #[test]
    fn empty_input_is_one_empty_paragraph() {
        assert_eq!(split_blocks(""), vec![Block::Paragraph(String::new())]);
    }

    #[test]
    fn bare_dash_line_is_not_an_item() {
        let text = "- uno\n-";
        assert_eq!(split_blocks(text), vec![Block::Paragraph(text.into())]);
    }
}
