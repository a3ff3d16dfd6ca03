/// Split one line of CSV text into its raw fields.
///
/// A `"` toggles the quoted state and is dropped from the output; commas inside
/// a quoted span stay part of the field. There is no escape sequence for a
/// literal quote: `""` toggles twice and contributes nothing. Fields are not
/// trimmed here, the loader does that during coercion.
///
/// Always yields at least one field, so an empty line becomes `[""]`.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}
