//! User contact fields and their masked projection.

use serde::{Deserialize, Serialize};

use crate::access::{SubjectId, should_mask_data};
use crate::masking::{mask_account_id, mask_email, mask_name, mask_phone_number};

/// Personal fields of a user that may be shown to other members.
///
/// Every field is optional; masking never adds or removes a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskableUserInfo {
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Mobile phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login account identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl MaskableUserInfo {
    /// Returns a copy with every present field passed through its masker.
    ///
    /// # Examples
    ///
    /// ```
    /// use member_presentation::MaskableUserInfo;
    ///
    /// let info = MaskableUserInfo {
    ///     email: Some("jane.doe@example.com".to_owned()),
    ///     name: Some("홍길동".to_owned()),
    ///     ..MaskableUserInfo::default()
    /// };
    /// let masked = info.masked();
    ///
    /// assert_eq!(masked.email.as_deref(), Some("ja***@example.com"));
    /// assert_eq!(masked.name.as_deref(), Some("홍*동"));
    /// assert!(masked.mobile.is_none());
    /// ```
    #[must_use]
    pub fn masked(&self) -> Self {
        Self {
            email: self.email.as_deref().map(mask_email),
            mobile: self.mobile.as_deref().map(mask_phone_number),
            name: self.name.as_deref().map(mask_name),
            account_id: self.account_id.as_deref().map(mask_account_id),
        }
    }
}

/// Returns `user` as the current user may see it.
///
/// The fields are copied verbatim when [`should_mask_data`] exempts the
/// viewer, and masked otherwise.
///
/// # Examples
///
/// ```
/// use member_presentation::{MaskableUserInfo, SubjectId, mask_user_info};
///
/// let user = MaskableUserInfo {
///     account_id: Some("user1234".to_owned()),
///     ..MaskableUserInfo::default()
/// };
/// let owner = SubjectId::from(1_i64);
/// let other = SubjectId::from(2_i64);
///
/// assert_eq!(mask_user_info(&user, &owner, &owner, false), user);
/// assert_eq!(
///     mask_user_info(&user, &other, &owner, false).account_id.as_deref(),
///     Some("us***")
/// );
/// ```
#[must_use]
pub fn mask_user_info(
    user: &MaskableUserInfo,
    current_user_id: &SubjectId,
    target_user_id: &SubjectId,
    is_admin: bool,
) -> MaskableUserInfo {
    if should_mask_data(current_user_id, target_user_id, is_admin) {
        user.masked()
    } else {
        user.clone()
    }
}

#[cfg(test)]
mod tests {
    //! Covers the object-level masking composer.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn full_user() -> MaskableUserInfo {
        MaskableUserInfo {
            email: Some("us@example.com".to_owned()),
            mobile: Some("010-1234-5678".to_owned()),
            name: Some("홍길동".to_owned()),
            account_id: Some("user1234".to_owned()),
        }
    }

    #[rstest]
    fn masks_every_field_for_other_users(full_user: MaskableUserInfo) {
        let masked = mask_user_info(
            &full_user,
            &SubjectId::from("viewer"),
            &SubjectId::from("owner"),
            false,
        );

        assert_eq!(
            masked,
            MaskableUserInfo {
                email: Some("u***@example.com".to_owned()),
                mobile: Some("010-****-5678".to_owned()),
                name: Some("홍*동".to_owned()),
                account_id: Some("us***".to_owned()),
            }
        );
    }

    #[rstest]
    #[case("owner", false)]
    #[case("viewer", true)]
    fn exempt_viewers_see_original_fields(
        full_user: MaskableUserInfo,
        #[case] current: &str,
        #[case] is_admin: bool,
    ) {
        let shown = mask_user_info(
            &full_user,
            &SubjectId::from(current),
            &SubjectId::from("owner"),
            is_admin,
        );

        assert_eq!(shown, full_user);
    }

    #[test]
    fn absent_fields_stay_absent() {
        let user = MaskableUserInfo {
            name: Some("Ada Lovelace".to_owned()),
            ..MaskableUserInfo::default()
        };

        let masked = user.masked();

        assert_eq!(masked.name.as_deref(), Some("A*** L***"));
        assert!(masked.email.is_none());
        assert!(masked.mobile.is_none());
        assert!(masked.account_id.is_none());
    }

    #[test]
    fn empty_fields_stay_empty() {
        let user = MaskableUserInfo {
            email: Some(String::new()),
            mobile: Some(String::new()),
            name: Some(String::new()),
            account_id: Some(String::new()),
        };

        assert_eq!(user.masked(), user);
    }

    #[test]
    fn serializes_without_absent_fields() {
        let user = MaskableUserInfo {
            account_id: Some("us***".to_owned()),
            ..MaskableUserInfo::default()
        };

        let json = serde_json::to_value(&user).expect("serialize");

        assert_eq!(json, serde_json::json!({"accountId": "us***"}));
    }
}
