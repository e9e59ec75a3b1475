use super::PresentationMeta;

/// Split optional YAML frontmatter off the top of a deck.
///
/// The block must open with `---` on the first line and close with another
/// `---` line. Malformed YAML is logged and ignored; the body still loads.
pub fn extract(content: &str) -> (PresentationMeta, String) {
    let content = content.replace("\r\n", "\n");
    let Some(rest) = content.strip_prefix("---\n") else {
        return (PresentationMeta::default(), content);
    };

    let mut yaml_len = None;
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            yaml_len = Some(offset);
            break;
        }
        offset += line.len();
    }

    let Some(yaml_len) = yaml_len else {
        return (PresentationMeta::default(), content);
    };

    let yaml = &rest[..yaml_len];
    let body = rest[yaml_len..]
        .split_once('\n')
        .map(|(_, body)| body)
        .unwrap_or("")
        .to_string();

    let meta = if yaml.trim().is_empty() {
        PresentationMeta::default()
    } else {
        serde_yaml::from_str(yaml).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid frontmatter: {e}");
            PresentationMeta::default()
        })
    };
    (meta, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_frontmatter() {
        let (meta, body) = extract("# Hello\n\nWorld");
        assert!(meta.title.is_none());
        assert_eq!(body, "# Hello\n\nWorld");
    }

    #[test]
    fn test_frontmatter_fields() {
        let content = "---\ntitle: Karate Journey\ntheme: dark\n\
                       transition: fade\nfooter: dojo\n---\n# First";
        let (meta, body) = extract(content);
        assert_eq!(meta.title.as_deref(), Some("Karate Journey"));
        assert_eq!(meta.theme.as_deref(), Some("dark"));
        assert_eq!(meta.transition.as_deref(), Some("fade"));
        assert_eq!(meta.footer.as_deref(), Some("dojo"));
        assert_eq!(body, "# First");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (meta, _) = extract("---\ntitle: T\nauthor: someone\n---\nbody");
        assert_eq!(meta.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_invalid_yaml_keeps_body() {
        let (meta, body) = extract("---\ntitle: [unclosed\n---\n# Slide");
        assert!(meta.title.is_none());
        assert_eq!(body, "# Slide");
    }

    #[test]
    fn test_unterminated_frontmatter_is_body() {
        let content = "---\ntitle: nope\n# Slide";
        let (meta, body) = extract(content);
        assert!(meta.title.is_none());
        assert_eq!(body, content);
    }
}
