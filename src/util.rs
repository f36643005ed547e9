/// True when the value is absent, empty, or only whitespace.
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}

pub fn is_not_empty(value: Option<&str>) -> bool {
    !is_empty(value)
}

/// Only `<` is escaped; everything else passes through untouched.
pub fn escape_for_markdown(text: &str) -> String {
    text.replace('<', "&lt;")
}

pub fn is_empty_array<T>(values: Option<&[T]>) -> bool {
    values.map_or(true, <[T]>::is_empty)
}
