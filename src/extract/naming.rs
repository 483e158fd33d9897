/// ID recorded when an element name carries no `:ID` suffix.
pub const NO_ID: &str = "N/A";

/// Splits a `Name:ID` element name on its last colon.
///
/// `"Door:M_Single:1234"` becomes `("Door:M_Single", "1234")`; a name
/// without a colon is returned whole with the ID `"N/A"`.
#[must_use]
pub fn split_name_and_id(raw: &str) -> (String, String) {
    match raw.rsplit_once(':') {
        Some((name, id)) => (name.to_string(), id.to_string()),
        None => (raw.to_string(), NO_ID.to_string()),
    }
}
