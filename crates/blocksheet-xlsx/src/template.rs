//! Minimal `{{key}}` template rendering used by every part writer

/// Replace each `{{key}}` in `template` with its value from `context`
///
/// Keys are trimmed before lookup, unknown keys render as an empty string,
/// and an unterminated `{{` is copied through unchanged. Values are inserted
/// verbatim; escape text before putting it in the context.
pub fn render(template: &str, context: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                if let Some((_, value)) = context.iter().find(|(k, _)| *k == key) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
