/// Normalize header text by replacing control characters with spaces and collapsing whitespace
///
/// Workbook headers often carry line breaks or doubled spaces typed into the cell,
/// e.g. "Name of Company/\nOrganization " becomes "Name of Company/ Organization".
pub fn normalize_string(value: &str) -> String {
    let normalized = value
        .chars() // Process character by character
        .map(|c| {
            if c.is_control() {
                ' ' // Replace control characters (newlines, tabs, etc.) with spaces
            } else {
                c
            }
        })
        .collect::<String>()
        .split_whitespace() // Split on whitespace to normalize multiple spaces
        .collect::<Vec<&str>>()
        .join(" "); // Join back with single spaces

    return normalized;
}
