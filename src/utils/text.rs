/// Turn free text into a day-name candidate: trim, uppercase the first
/// letter, lowercase the rest ("monday" -> "Monday", " TUESDAY " -> "Tuesday").
///
/// This is deliberately the only normalization applied before the timetable
/// lookup; anything that does not land on a canonical day name simply fails
/// the lookup and gets the not-found reply.
pub fn normalize_day_candidate(text: &str) -> String {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
