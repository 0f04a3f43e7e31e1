//! WhatsApp click-to-chat helpers.
//!
//! Phone numbers are stored free-form in the content API (`0812-...`,
//! `+62 812 ...`, `812...`). Before building a `wa.me` link they are reduced
//! to digits and forced into Indonesian international format.

use crate::str_ext::StrExt;

/// Country calling code every normalized number starts with.
pub const COUNTRY_CODE: &str = "62";

/// National trunk prefix replaced by the country code.
const TRUNK_PREFIX: char = '0';

const WA_ME_BASE: &str = "https://wa.me/";

/// Message pre-filled in the chat when the caller supplies none.
pub const DEFAULT_MESSAGE: &str =
    "Hi, I found your QR code and would like to inquire about your products.";

/// Normalize a free-form phone number into `62`-prefixed digits.
///
/// Non-digits are dropped. A number already starting with `62` is kept as is,
/// a leading `0` is replaced by `62`, anything else gets `62` prepended.
/// No length validation is done, so input without digits yields `"62"`.
#[must_use]
pub fn normalize_number(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    if digits.starts_with(COUNTRY_CODE) {
        return digits;
    }

    let local = digits.strip_prefix(TRUNK_PREFIX).unwrap_or(&digits);
    format!("{COUNTRY_CODE}{local}")
}

/// Build a `wa.me` link to `raw_number` with a pre-filled message.
///
/// An absent or empty `message` falls back to [`DEFAULT_MESSAGE`]. The text is
/// percent-encoded so only `A-Z a-z 0-9 - _ . ~` appear literally.
///
/// Example: `https://wa.me/628123456789?text=Hello`
#[must_use]
pub fn build_link(raw_number: &str, message: Option<&str>) -> String {
    let number = normalize_number(raw_number);
    let text = message.unwrap_or_default().or_str(DEFAULT_MESSAGE);
    format!("{WA_ME_BASE}{number}?text={}", urlencoding::encode(text))
}
