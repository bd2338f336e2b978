//! Deterministic avatar colors and initials.
//!
//! An account identifier is hashed with the classic 31-multiplier string
//! hash, the hash is bucketed into a pastel HSL color, and a black or white
//! text color is chosen for legibility. The same identifier always yields
//! the same pair, so avatars stay stable across sessions and devices.

use serde::Serialize;

use crate::color::{Hsl, TextColor};
use crate::masking::is_hangul_name;

/// Base and span of the generated saturation, in percent.
const SATURATION_BASE: u8 = 40;
const SATURATION_SPAN: u32 = 21;

/// Base and span of the generated lightness, in percent.
const LIGHTNESS_BASE: u8 = 70;
const LIGHTNESS_SPAN: u32 = 16;

const HUE_SPAN: u32 = 360;

/// Initials shown when neither the name nor the account id has usable
/// characters.
const FALLBACK_INITIALS: &str = "?";

const MAX_INITIALS: usize = 2;

/// Background and text colors for an avatar badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarColors {
    /// Background as a lowercase `#rrggbb` string.
    pub background_color: String,
    /// Contrasting text color.
    pub text_color: TextColor,
}

/// Hashes a string to a non-negative 32-bit value.
///
/// Each UTF-16 code unit is folded in as `hash * 31 + unit` with 32-bit
/// two's-complement wraparound, and the absolute value of the final signed
/// hash is returned. `i32::MIN` maps to `2_147_483_648`.
///
/// # Examples
///
/// ```
/// use member_presentation::hash_string;
///
/// assert_eq!(hash_string(""), 0);
/// assert_eq!(hash_string("a"), 97);
/// assert_eq!(hash_string("bob"), 97_717);
/// ```
#[must_use]
pub fn hash_string(value: &str) -> u32 {
    value
        .encode_utf16()
        .fold(0_i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Buckets a hash into the pastel avatar palette.
///
/// Hue covers the full wheel while saturation stays within `40..=60` and
/// lightness within `70..=85`.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "palette buckets are defined by remainders of the hash"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "each remainder is below the target type's maximum"
)]
#[must_use]
pub const fn hash_to_hsl(hash: u32) -> Hsl {
    Hsl {
        hue: (hash % HUE_SPAN) as u16,
        saturation: SATURATION_BASE + (hash % SATURATION_SPAN) as u8,
        lightness: LIGHTNESS_BASE + (hash % LIGHTNESS_SPAN) as u8,
    }
}

/// Derives the avatar colors for an account identifier.
///
/// Any string is accepted. The empty string hashes to zero and produces the
/// first palette entry.
///
/// # Examples
///
/// ```
/// use member_presentation::{TextColor, avatar_colors};
///
/// let colors = avatar_colors("");
/// assert_eq!(colors.background_color, "#d19494");
/// assert_eq!(colors.text_color, TextColor::Black);
/// assert_eq!(avatar_colors("user1234"), avatar_colors("user1234"));
/// ```
#[must_use]
pub fn avatar_colors(account_id: &str) -> AvatarColors {
    let rgb = hash_to_hsl(hash_string(account_id)).to_rgb();
    AvatarColors {
        background_color: rgb.to_hex(),
        text_color: rgb.text_color(),
    }
}

/// Derives up to two uppercase initials for an avatar badge.
///
/// The first characters of the first two name parts are used. A Korean name
/// written without spaces contributes only its family-name syllable. Without
/// a usable name the first alphanumeric characters of the account id are
/// used instead.
///
/// # Examples
///
/// ```
/// use member_presentation::avatar_initials;
///
/// assert_eq!(avatar_initials(Some("Ada Lovelace"), "ada01"), "AL");
/// assert_eq!(avatar_initials(Some("홍길동"), "hong"), "홍");
/// assert_eq!(avatar_initials(None, "jdoe-42"), "JD");
/// assert_eq!(avatar_initials(Some("  "), "--"), "?");
/// ```
#[must_use]
pub fn avatar_initials(name: Option<&str>, account_id: &str) -> String {
    if let Some(trimmed) = name.map(str::trim).filter(|value| !value.is_empty()) {
        if is_hangul_name(trimmed) {
            return trimmed.chars().take(1).collect();
        }
        let initials: String = trimmed
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(MAX_INITIALS)
            .collect();
        if !initials.is_empty() {
            return initials.to_uppercase();
        }
    }

    let initials: String = account_id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_INITIALS)
        .collect();
    if initials.is_empty() {
        return FALLBACK_INITIALS.to_owned();
    }
    initials.to_uppercase()
}
