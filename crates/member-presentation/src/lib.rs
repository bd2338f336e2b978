//! Deterministic avatar colors and PII masking for member-facing views.
//!
//! Member lists, report authors and approval chains all show other people's
//! contact details. This crate provides the presentation rules those views
//! share:
//!
//! - Avatar colors derived from an account id with a stable string hash, so
//!   the same member always gets the same badge
//! - Text color selection meeting WCAG contrast guidance
//! - Format-aware masking of emails, phone numbers, names and account ids
//! - The authorization gate deciding when masking applies
//! - A roster presenter and the `member-preview` command built on top
//!
//! Every presentation function is pure and total: malformed input degrades
//! to a defined fallback instead of an error.
//!
//! # Example
//!
//! ```
//! use member_presentation::{
//!     MaskableUserInfo, SubjectId, avatar_colors, mask_user_info,
//! };
//!
//! let colors = avatar_colors("user1234");
//! assert_eq!(colors.background_color, "#91e3c1");
//!
//! let user = MaskableUserInfo {
//!     email: Some("us@example.com".to_owned()),
//!     mobile: Some("010-1234-5678".to_owned()),
//!     ..MaskableUserInfo::default()
//! };
//! let shown = mask_user_info(&user, &SubjectId::from(1_i64), &SubjectId::from(2_i64), false);
//!
//! assert_eq!(shown.email.as_deref(), Some("u***@example.com"));
//! assert_eq!(shown.mobile.as_deref(), Some("010-****-5678"));
//! ```

mod access;
mod avatar;
mod color;
mod config;
mod error;
mod masking;
pub mod preview_cli;
mod profile;
mod roster;

pub use access::{SubjectId, Viewer, should_mask_data};
pub use avatar::{AvatarColors, avatar_colors, avatar_initials, hash_string, hash_to_hsl};
pub use color::{Hsl, Rgb, TextColor, contrast_ratio};
pub use config::PreviewSettings;
pub use error::{RosterError, SettingsError};
pub use masking::{mask_account_id, mask_email, mask_name, mask_phone_number};
pub use profile::{MaskableUserInfo, mask_user_info};
pub use roster::{MemberRecord, PresentedMember, Roster, present_member, present_roster};
