//! Format-aware partial redaction of personal data.
//!
//! Each masker keeps just enough of the original value for a colleague to
//! recognise it while hiding the rest. None of them fail: unsupported or
//! empty input falls back to a defined value so callers always receive a
//! string.

use std::sync::OnceLock;

use regex::Regex;

/// Marker substituted for hidden characters in emails and account ids.
const MASK: &str = "***";

/// Marker substituted for hidden phone number digits.
const PHONE_MASK: &str = "****";

/// Maximum number of leading characters left visible.
const MAX_VISIBLE: usize = 2;

static HANGUL_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn hangul_name_regex() -> &'static Regex {
    HANGUL_NAME_RE.get_or_init(|| {
        // Precomposed Hangul syllables only; jamo are treated as foreign text.
        let pattern = "^[\u{AC00}-\u{D7A3}]{2,4}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("hangul name regex failed to compile: {error}"))
    })
}

/// Returns `true` when `name` is written as two to four Hangul syllables.
#[must_use]
pub(crate) fn is_hangul_name(name: &str) -> bool {
    hangul_name_regex().is_match(name)
}

fn leading_chars(value: &str, count: usize) -> String {
    value.chars().take(count).collect()
}

/// Masks the local part of an email address.
///
/// Up to two leading characters stay visible (half the local part, rounded
/// down). Input without a local part or domain is returned unchanged.
///
/// # Examples
///
/// ```
/// use member_presentation::mask_email;
///
/// assert_eq!(mask_email("us@example.com"), "u***@example.com");
/// assert_eq!(mask_email("jane.doe@example.com"), "ja***@example.com");
/// assert_eq!(mask_email("not-an-email"), "not-an-email");
/// ```
#[expect(
    clippy::integer_division,
    reason = "the visible prefix length rounds down"
)]
#[must_use]
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_owned();
    };
    if local.is_empty() || domain.is_empty() {
        return email.to_owned();
    }

    let visible = MAX_VISIBLE.min(local.chars().count() / 2);
    format!("{}{MASK}@{domain}", leading_chars(local, visible))
}

/// Masks the middle block of a Korean-format phone number.
///
/// Separators are ignored. Eleven digits render as `XXX-****-XXXX` and ten
/// digits as `XX-****-XXXX`; any other digit count is returned unchanged.
///
/// # Examples
///
/// ```
/// use member_presentation::mask_phone_number;
///
/// assert_eq!(mask_phone_number("010-1234-5678"), "010-****-5678");
/// assert_eq!(mask_phone_number("02 1234 5678"), "02-****-5678");
/// assert_eq!(mask_phone_number("+1 555 0100"), "+1 555 0100");
/// ```
#[must_use]
pub fn mask_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let prefix_len = match digits.len() {
        11 => 3,
        10 => 2,
        _ => return phone.to_owned(),
    };
    let suffix: String = digits.chars().skip(prefix_len + PHONE_MASK.len()).collect();
    format!("{}-{PHONE_MASK}-{suffix}", leading_chars(&digits, prefix_len))
}

/// Masks a personal name.
///
/// Korean names of two to four syllables keep their first and last syllable
/// (`홍길동` → `홍*동`, `이산` → `이*`). Anything else is treated as
/// space-separated parts, each reduced to its first character followed by
/// `***`.
///
/// # Examples
///
/// ```
/// use member_presentation::mask_name;
///
/// assert_eq!(mask_name("홍길동"), "홍*동");
/// assert_eq!(mask_name("이산"), "이*");
/// assert_eq!(mask_name("Ada Lovelace"), "A*** L***");
/// ```
#[must_use]
pub fn mask_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    if is_hangul_name(name) {
        return mask_hangul_name(name);
    }

    name.split(' ')
        .map(|part| {
            part.chars()
                .next()
                .map_or_else(String::new, |first| format!("{first}{MASK}"))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn mask_hangul_name(name: &str) -> String {
    let syllables: Vec<char> = name.chars().collect();
    let mut masked = String::with_capacity(name.len());
    match syllables.as_slice() {
        [first, _] => {
            masked.push(*first);
            masked.push('*');
        }
        [first, interior @ .., last] => {
            masked.push(*first);
            masked.extend(interior.iter().map(|_| '*'));
            masked.push(*last);
        }
        _ => masked.push_str(name),
    }
    masked
}

/// Masks an account identifier.
///
/// Up to two leading characters stay visible (a third of the identifier,
/// rounded down), followed by `***`. The empty identifier stays empty.
///
/// # Examples
///
/// ```
/// use member_presentation::mask_account_id;
///
/// assert_eq!(mask_account_id("user1234"), "us***");
/// assert_eq!(mask_account_id("bob"), "b***");
/// assert_eq!(mask_account_id("ab"), "***");
/// ```
#[expect(
    clippy::integer_division,
    reason = "the visible prefix length rounds down"
)]
#[must_use]
pub fn mask_account_id(account_id: &str) -> String {
    if account_id.is_empty() {
        return String::new();
    }
    let visible = MAX_VISIBLE.min(account_id.chars().count() / 3);
    format!("{}{MASK}", leading_chars(account_id, visible))
}
