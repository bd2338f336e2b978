//! Who may see unmasked personal data.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a user, normalised to its textual form.
///
/// Upstream payloads carry user ids either as JSON strings or as integers.
/// Both are stored as text so that `42` and `"42"` identify the same user.
///
/// # Examples
///
/// ```
/// use member_presentation::SubjectId;
///
/// assert_eq!(SubjectId::from(42_i64), SubjectId::from("42"));
/// assert_eq!(SubjectId::from("u-7").as_str(), "u-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSubjectId", into = "String")]
pub struct SubjectId(String);

impl SubjectId {
    /// Builds an identifier from any textual value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SubjectId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<SubjectId> for String {
    fn from(value: SubjectId) -> Self {
        value.0
    }
}

impl From<String> for SubjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SubjectId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<i64> for SubjectId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for SubjectId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for SubjectId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for SubjectId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

/// Wire shapes accepted for a user id.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSubjectId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawSubjectId> for SubjectId {
    fn from(value: RawSubjectId) -> Self {
        match value {
            RawSubjectId::Text(text) => Self(text),
            RawSubjectId::Signed(number) => Self::from(number),
            RawSubjectId::Unsigned(number) => Self::from(number),
        }
    }
}

/// Reads an optional user id given either as text or as an integer.
///
/// Environment layers hand numeric values over as integers, so a plain
/// `Option<String>` field would reject `MEMBER_PREVIEW_VIEWER_ID=42`.
pub(crate) fn deserialize_optional_id<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<SubjectId>::deserialize(deserializer).map(|id| id.map(String::from))
}

/// Decides whether `target_user_id`'s data must be masked for the viewer.
///
/// Administrators and users looking at their own record see everything;
/// everyone else sees masked values.
///
/// # Examples
///
/// ```
/// use member_presentation::{SubjectId, should_mask_data};
///
/// let me = SubjectId::from(7_i64);
/// let colleague = SubjectId::from("8");
///
/// assert!(!should_mask_data(&me, &SubjectId::from("7"), false));
/// assert!(should_mask_data(&me, &colleague, false));
/// assert!(!should_mask_data(&me, &colleague, true));
/// ```
#[must_use]
pub fn should_mask_data(
    current_user_id: &SubjectId,
    target_user_id: &SubjectId,
    is_admin: bool,
) -> bool {
    !is_admin && current_user_id != target_user_id
}

/// The user on whose behalf records are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    id: Option<SubjectId>,
    is_admin: bool,
}

impl Viewer {
    /// Creates a viewer; `None` means the viewer is anonymous.
    #[must_use]
    pub const fn new(id: Option<SubjectId>, is_admin: bool) -> Self {
        Self { id, is_admin }
    }

    /// Returns the viewer's id, if known.
    #[must_use]
    pub const fn id(&self) -> Option<&SubjectId> {
        self.id.as_ref()
    }

    /// Returns `true` when the viewer has administrative access.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Decides whether the target's data must be masked for this viewer.
    ///
    /// Anonymous viewers never match a target, so only the admin flag can
    /// exempt them.
    #[must_use]
    pub fn should_mask(&self, target_user_id: &SubjectId) -> bool {
        self.id.as_ref().map_or(!self.is_admin, |current| {
            should_mask_data(current, target_user_id, self.is_admin)
        })
    }
}
