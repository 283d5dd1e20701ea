// Render-time masking of contact details

const NAME_MASK: &str = "**";
const PHONE_MASK: &str = "****";

/// Keep the first character of a name and hide the rest.
pub fn mask_name(name: &str) -> String {
    match name.chars().next() {
        Some(first) => format!("{}{}", first, NAME_MASK),
        None => String::new(),
    }
}

/// Mask the middle four digits of an 11-digit mobile number (3-4-4).
/// Anything else, including numbers with a country code or separators, is
/// returned unchanged.
pub fn mask_phone(phone: &str) -> String {
    if phone.len() != 11 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return phone.to_string();
    }
    format!("{}{}{}", &phone[..3], PHONE_MASK, &phone[7..])
}
