use super::blocks::is_directive;

/// Split a deck body (frontmatter already removed) into raw slide sources.
///
/// A new slide starts at:
/// 1. a `---` line with blank lines (or the document edge) on both sides
/// 2. a run of three or more blank lines
/// 3. a `# ` heading when the current slide already has content
///
/// Nothing inside a fenced code block ever splits. Directive lines sitting
/// right above an inferred heading travel with that heading.
pub fn split(body: &str) -> Vec<String> {
    let body = body.replace("\r\n", "\n");
    let lines: Vec<&str> = body.lines().collect();

    let mut slides = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut blank_run = 0;
    let mut fence: Option<(char, usize)> = None;

    for (i, &line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if let Some((ch, len)) = fence {
            current.push(line);
            if closes_fence(trimmed, ch, len) {
                fence = None;
            }
            continue;
        }

        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run == 3 {
                flush(&mut current, &mut slides);
            } else {
                current.push(line);
            }
            continue;
        }
        blank_run = 0;

        if let Some(open) = opens_fence(trimmed) {
            fence = Some(open);
            current.push(line);
            continue;
        }

        let prev_blank = i == 0 || lines[i - 1].trim().is_empty();
        let next_blank = lines.get(i + 1).is_none_or(|l| l.trim().is_empty());
        if is_rule(trimmed) && prev_blank && next_blank {
            flush(&mut current, &mut slides);
            continue;
        }

        if line.starts_with("# ") && has_content(&current) {
            let carried = take_trailing_directives(&mut current);
            flush(&mut current, &mut slides);
            current = carried;
        }

        current.push(line);
    }

    flush(&mut current, &mut slides);
    slides
}

fn flush(current: &mut Vec<&str>, slides: &mut Vec<String>) {
    let text = current.join("\n");
    let text = text.trim();
    if !text.is_empty() {
        slides.push(text.to_string());
    }
    current.clear();
}

fn has_content(lines: &[&str]) -> bool {
    lines.iter().any(|l| {
        let t = l.trim();
        !t.is_empty() && !is_directive(t)
    })
}

/// Pop trailing directive and blank lines, returning the directives in order.
fn take_trailing_directives<'a>(current: &mut Vec<&'a str>) -> Vec<&'a str> {
    let mut carried = Vec::new();
    while let Some(&last) = current.last() {
        let t = last.trim();
        if t.is_empty() {
            current.pop();
        } else if is_directive(t) {
            carried.push(last);
            current.pop();
        } else {
            break;
        }
    }
    carried.reverse();
    carried
}

fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

fn opens_fence(line: &str) -> Option<(char, usize)> {
    let ch = line.chars().next()?;
    if ch != '`' && ch != '~' {
        return None;
    }
    let len = line.chars().take_while(|&c| c == ch).count();
    (len >= 3).then_some((ch, len))
}

fn closes_fence(line: &str, ch: char, len: usize) -> bool {
    let run = line.chars().take_while(|&c| c == ch).count();
    run >= len && line.chars().skip(run).all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_split() {
        let slides = split("Slide one\n\n\n\nSlide two");
        assert_eq!(slides, vec!["Slide one", "Slide two"]);
    }

    #[test]
    fn test_two_blank_lines_do_not_split() {
        let slides = split("Para one\n\n\nPara two");
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_dash_separator() {
        let slides = split("Slide one\n\n---\n\nSlide two");
        assert_eq!(slides, vec!["Slide one", "Slide two"]);
    }

    #[test]
    fn test_dashes_without_blank_lines_stay() {
        let slides = split("Heading\n---\nText");
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_combined_separators_make_one_break() {
        let slides = split("Slide one\n\n\n\n---\n\n\n\nSlide two");
        assert_eq!(slides.len(), 2);
    }

    #[test]
    fn test_heading_inference() {
        let slides = split("# First\n\nContent\n\n# Second\n\nMore content");
        assert_eq!(slides.len(), 2);
        assert!(slides[0].starts_with("# First"));
        assert!(slides[1].starts_with("# Second"));
    }

    #[test]
    fn test_h2_does_not_split() {
        assert_eq!(split("# Title\n\n## Subtitle\n\nContent").len(), 1);
    }

    #[test]
    fn test_directive_moves_with_heading() {
        let slides = split("# Title\n\nSubtitle\n\n@media: 12\n# Video\n\nWatch");
        assert_eq!(slides.len(), 2);
        assert!(!slides[0].contains("@media"));
        assert!(slides[1].starts_with("@media: 12\n# Video"));
    }

    #[test]
    fn test_heading_in_code_fence_does_not_split() {
        let slides = split("# Title\n\n```python\n# comment\n\n\n\nprint('hi')\n```");
        assert_eq!(slides.len(), 1);
    }
}
