use std::sync::LazyLock;

use regex::Regex;

use super::{Block, Directive};

static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([A-Za-z0-9_-]+):\s*(.*)$").expect("valid regex"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*#*$").expect("valid regex"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(.*)$").expect("valid regex"));
static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+(.*)$").expect("valid regex"));

pub fn is_directive(line: &str) -> bool {
    DIRECTIVE.is_match(line)
}

/// Pull `@key: value` lines out of a raw slide, returning them and the rest.
pub fn extract_directives(raw: &str) -> (Vec<Directive>, String) {
    let mut directives = Vec::new();
    let mut content = Vec::new();
    let mut in_fence = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
        }
        if !in_fence {
            if let Some(caps) = DIRECTIVE.captures(trimmed) {
                directives.push(Directive {
                    name: caps[1].to_lowercase(),
                    value: caps[2].trim().to_string(),
                });
                continue;
            }
        }
        content.push(line);
    }

    (directives, content.join("\n"))
}

/// Parse slide markdown into blocks.
pub fn parse(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut quote: Vec<&str> = Vec::new();
    let mut list: Option<(bool, Vec<String>)> = None;
    let mut code: Option<(Option<String>, Vec<&str>)> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some((language, lines)) = code.as_mut() {
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                blocks.push(Block::Code {
                    language: language.take(),
                    code: lines.join("\n"),
                });
                code = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        if let Some(lang) = trimmed
            .strip_prefix("```")
            .or_else(|| trimmed.strip_prefix("~~~"))
        {
            flush_all(&mut blocks, &mut paragraph, &mut quote, &mut list);
            let lang = lang.trim_matches(|c| c == '`' || c == '~').trim();
            code = Some(((!lang.is_empty()).then(|| lang.to_string()), Vec::new()));
            continue;
        }

        if trimmed.is_empty() {
            flush_all(&mut blocks, &mut paragraph, &mut quote, &mut list);
            continue;
        }

        if let Some(caps) = HEADING.captures(trimmed) {
            flush_all(&mut blocks, &mut paragraph, &mut quote, &mut list);
            blocks.push(Block::Heading {
                level: caps[1].len() as u8,
                text: caps[2].to_string(),
            });
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('>') {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_list(&mut blocks, &mut list);
            quote.push(rest.trim());
            continue;
        }

        let item = BULLET
            .captures(trimmed)
            .map(|c| (false, c[1].to_string()))
            .or_else(|| ORDERED.captures(trimmed).map(|c| (true, c[1].to_string())));
        if let Some((ordered, text)) = item {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_quote(&mut blocks, &mut quote);
            match list.as_mut() {
                Some((kind, items)) if *kind == ordered => items.push(text),
                _ => {
                    flush_list(&mut blocks, &mut list);
                    list = Some((ordered, vec![text]));
                }
            }
            continue;
        }

        // Continuation of a list item or quote, or plain paragraph text.
        if let Some((_, items)) = list.as_mut() {
            if line.starts_with(' ') || line.starts_with('\t') {
                if let Some(last) = items.last_mut() {
                    last.push(' ');
                    last.push_str(trimmed);
                }
                continue;
            }
        }
        if !quote.is_empty() {
            quote.push(trimmed);
            continue;
        }
        flush_list(&mut blocks, &mut list);
        paragraph.push(trimmed);
    }

    if let Some((language, lines)) = code {
        blocks.push(Block::Code {
            language,
            code: lines.join("\n"),
        });
    }
    flush_all(&mut blocks, &mut paragraph, &mut quote, &mut list);
    blocks
}

fn flush_all(
    blocks: &mut Vec<Block>,
    paragraph: &mut Vec<&str>,
    quote: &mut Vec<&str>,
    list: &mut Option<(bool, Vec<String>)>,
) {
    flush_paragraph(blocks, paragraph);
    flush_quote(blocks, quote);
    flush_list(blocks, list);
}

fn flush_paragraph(blocks: &mut Vec<Block>, paragraph: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph {
            text: paragraph.join(" "),
        });
        paragraph.clear();
    }
}

fn flush_quote(blocks: &mut Vec<Block>, quote: &mut Vec<&str>) {
    if !quote.is_empty() {
        blocks.push(Block::Quote {
            text: quote.join(" ").trim().to_string(),
        });
        quote.clear();
    }
}

fn flush_list(blocks: &mut Vec<Block>, list: &mut Option<(bool, Vec<String>)>) {
    if let Some((ordered, items)) = list.take() {
        blocks.push(Block::List { ordered, items });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_detection() {
        assert!(is_directive("@layout: title"));
        assert!(is_directive("@media: 12.5"));
        assert!(!is_directive("@ not one"));
        assert!(!is_directive("email@example.com: hi"));
    }

    #[test]
    fn test_extract_directives() {
        let (directives, content) = extract_directives("@layout: quote\n@Media: 8\n> Wise words");
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].name, "layout");
        assert_eq!(directives[0].value, "quote");
        assert_eq!(directives[1].name, "media");
        assert_eq!(content, "> Wise words");
    }

    #[test]
    fn test_directive_inside_code_is_content() {
        let (directives, content) = extract_directives("```\n@decorator: x\n```");
        assert!(directives.is_empty());
        assert!(content.contains("@decorator: x"));
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let blocks = parse("# Title\n\nFirst line\nsecond line\n\n## Sub");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::Heading { level: 1, text } if text == "Title"));
        assert!(
            matches!(&blocks[1], Block::Paragraph { text } if text == "First line second line")
        );
        assert!(matches!(&blocks[2], Block::Heading { level: 2, .. }));
    }

    #[test]
    fn test_lists() {
        let blocks = parse("- one\n- two\n  continued\n\n1. first\n2. second");
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            Block::List { ordered, items } => {
                assert!(!ordered);
                assert_eq!(items, &vec!["one".to_string(), "two continued".to_string()]);
            }
            other => panic!("expected list, got {other:?}"),
        }
        assert!(matches!(&blocks[1], Block::List { ordered: true, items } if items.len() == 2));
    }

    #[test]
    fn test_quote() {
        let blocks = parse("> Discipline is\n> freedom\n\n-- Sensei");
        assert!(matches!(&blocks[0], Block::Quote { text } if text == "Discipline is freedom"));
        assert!(matches!(&blocks[1], Block::Paragraph { text } if text == "-- Sensei"));
    }

    #[test]
    fn test_code_block() {
        let blocks = parse("```rust\nfn main() {}\n\n// done\n```\nAfter");
        match &blocks[0] {
            Block::Code { language, code } => {
                assert_eq!(language.as_deref(), Some("rust"));
                assert_eq!(code, "fn main() {}\n\n// done");
            }
            other => panic!("expected code, got {other:?}"),
        }
        assert!(matches!(&blocks[1], Block::Paragraph { .. }));
    }
}
