/// Coerce a form value to an integer, defaulting to 0.
///
/// Form fields arrive as text. Anything that does not parse as an integer
/// (empty, fractional, garbage) becomes 0 instead of failing the request,
/// and ids coerced to 0 match no row.
pub(crate) fn int_or_zero(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
