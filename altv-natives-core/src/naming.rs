/// Convert a native's snake_case name into a lowerCamelCase identifier.
///
/// A single leading underscore (used for unofficial native names) is
/// dropped first, so `_GET_ENTITY_COORDS` and `GET_ENTITY_COORDS` both
/// become `getEntityCoords`. Empty segments contribute nothing.
pub fn normalize(source: &str) -> String {
    let trimmed = source.strip_prefix('_').unwrap_or(source);
    let lower = trimmed.to_lowercase();
    let mut segments = lower.split('_');

    let mut out = String::with_capacity(lower.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
