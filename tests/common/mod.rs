//! Common test utilities

/// A parsed `<span style="...">text</span>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub foreground: String,
    pub background: Option<String>,
    pub text: String,
}

/// Extract every span from a madcolor HTML document.
pub fn parse_spans(html: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find("<span style=\"") {
        rest = &rest[start + "<span style=\"".len()..];
        let style_end = rest.find("\">").expect("unterminated style attribute");
        let style = &rest[..style_end];
        rest = &rest[style_end + 2..];
        let text_end = rest.find("</span>").expect("unterminated span");
        let text = &rest[..text_end];
        rest = &rest[text_end + "</span>".len()..];

        let mut foreground = String::new();
        let mut background = None;
        for decl in style.split(';') {
            match decl.split_once(':') {
                Some(("color", value)) => foreground = value.to_string(),
                Some(("background-color", value)) => background = Some(value.to_string()),
                _ => {}
            }
        }
        spans.push(Span {
            foreground,
            background,
            text: text.to_string(),
        });
    }
    spans
}

/// Parse `#rrggbb` into channels
pub fn rgb(hex: &str) -> [u8; 3] {
    let h = hex.trim_start_matches('#');
    assert_eq!(h.len(), 6, "not a 6-digit hex color: {}", hex);
    [
        u8::from_str_radix(&h[0..2], 16).unwrap(),
        u8::from_str_radix(&h[2..4], 16).unwrap(),
        u8::from_str_radix(&h[4..6], 16).unwrap(),
    ]
}

/// Euclidean RGB distance between two `#rrggbb` strings
pub fn distance(a: &str, b: &str) -> f64 {
    rgb(a)
        .iter()
        .zip(rgb(b))
        .map(|(&x, y)| (f64::from(x) - f64::from(y)).powi(2))
        .sum::<f64>()
        .sqrt()
}
