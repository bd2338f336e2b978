//! Member rosters rendered for a particular viewer.
//!
//! A roster is the JSON array of member records that list pages display.
//! Presenting it masks each record for the viewer and attaches the avatar
//! badge derived from the record's unmasked account id and name.

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::access::{SubjectId, Viewer};
use crate::avatar::{AvatarColors, avatar_colors, avatar_initials};
use crate::error::RosterError;
use crate::profile::MaskableUserInfo;

/// A member as stored upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    /// Stable user id used for the self-view check.
    pub id: SubjectId,
    /// Contact fields subject to masking.
    #[serde(flatten)]
    pub info: MaskableUserInfo,
}

/// A member as shown to a viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentedMember {
    /// Stable user id.
    pub id: SubjectId,
    /// Contact fields, masked unless the viewer is exempt.
    #[serde(flatten)]
    pub info: MaskableUserInfo,
    /// Avatar badge colors.
    pub avatar: AvatarColors,
    /// Avatar badge initials.
    pub initials: String,
    /// Whether `info` was masked for this viewer.
    pub is_masked: bool,
}

/// An ordered list of member records.
///
/// # Example
///
/// ```
/// use member_presentation::Roster;
///
/// let roster = Roster::from_json(r#"[{"id": 1, "accountId": "user1234"}]"#)
///     .expect("valid roster");
/// assert_eq!(roster.members().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<MemberRecord>,
}

impl Roster {
    /// Wraps already-loaded member records.
    #[must_use]
    pub const fn new(members: Vec<MemberRecord>) -> Self {
        Self { members }
    }

    /// Parses a roster from a JSON array of member records.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ParseError`] if the JSON is malformed or a
    /// record lacks an `id`.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let members: Vec<MemberRecord> =
            serde_json::from_str(json).map_err(|e| RosterError::ParseError {
                message: e.to_string(),
            })?;

        Ok(Self { members })
    }

    /// Loads a roster file relative to a capability-scoped directory.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if the file cannot be read, is not UTF-8, or
    /// cannot be parsed.
    pub fn from_file(dir: &Dir, file_name: &Utf8Path) -> Result<Self, RosterError> {
        let payload = dir.read(file_name).map_err(|e| RosterError::IoError {
            path: file_name.to_path_buf(),
            message: e.to_string(),
        })?;
        let contents = String::from_utf8(payload).map_err(|_| RosterError::InvalidEncoding {
            path: file_name.to_path_buf(),
        })?;

        let roster = Self::from_json(&contents)?;
        debug!(
            path = %file_name,
            member_count = roster.members.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    /// Returns the member records in roster order.
    #[must_use]
    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }
}

/// Renders one member for the viewer.
///
/// Avatar colors and initials are derived from the original fields, so a
/// member's badge looks the same whether or not their details are masked.
/// A record without an account id uses the empty-string palette entry.
#[must_use]
pub fn present_member(record: &MemberRecord, viewer: &Viewer) -> PresentedMember {
    let account_id = record.info.account_id.as_deref().unwrap_or_default();
    let is_masked = viewer.should_mask(&record.id);
    let info = if is_masked {
        record.info.masked()
    } else {
        record.info.clone()
    };

    PresentedMember {
        id: record.id.clone(),
        info,
        avatar: avatar_colors(account_id),
        initials: avatar_initials(record.info.name.as_deref(), account_id),
        is_masked,
    }
}

/// Renders every roster member for the viewer, preserving order.
///
/// # Example
///
/// ```
/// use member_presentation::{Roster, SubjectId, Viewer, present_roster};
///
/// let roster = Roster::from_json(
///     r#"[{"id": 1, "email": "us@example.com"}, {"id": 2, "email": "me@example.com"}]"#,
/// )
/// .expect("valid roster");
/// let viewer = Viewer::new(Some(SubjectId::from(2_i64)), false);
///
/// let presented = present_roster(&roster, &viewer);
///
/// assert_eq!(presented[0].info.email.as_deref(), Some("u***@example.com"));
/// assert_eq!(presented[1].info.email.as_deref(), Some("me@example.com"));
/// ```
#[must_use]
pub fn present_roster(roster: &Roster, viewer: &Viewer) -> Vec<PresentedMember> {
    let presented: Vec<PresentedMember> = roster
        .members()
        .iter()
        .map(|record| present_member(record, viewer))
        .collect();

    debug!(
        member_count = presented.len(),
        masked_count = presented.iter().filter(|member| member.is_masked).count(),
        is_admin = viewer.is_admin(),
        "roster presented"
    );
    presented
}
