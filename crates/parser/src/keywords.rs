//! Intent keyword tables
//!
//! Tables are matched against lowercased utterances with plain substring
//! search. Russian entries are stems so that case endings still match;
//! Thai has no inflection to worry about.

pub(crate) const CANCEL_KEYWORDS: [&str; 3] = ["cancel", "отмен", "ยกเลิก"];

pub(crate) const AVAILABILITY_KEYWORDS: [&str; 6] =
    ["available", "availability", "free", "свободн", "доступн", "ว่าง"];

pub(crate) const BOOKING_KEYWORDS: [&str; 6] =
    ["book", "reserve", "забронир", "бронь", "запиши", "จอง"];

pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
