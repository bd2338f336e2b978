//! `member-preview` settings loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::access::{SubjectId, Viewer, deserialize_optional_id};
use crate::error::SettingsError;

const PROGRAM_NAME: &str = "member-preview";

/// Defaults for the preview tool, read from `MEMBER_PREVIEW_*` variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MEMBER_PREVIEW")]
pub struct PreviewSettings {
    /// Id of the user the roster is rendered for.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub viewer_id: Option<String>,
    /// Render as an administrator, bypassing masking.
    #[ortho_config(default = false)]
    pub is_admin: bool,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl PreviewSettings {
    /// Loads settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::LoadFailed`] when a value cannot be parsed.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
            SettingsError::LoadFailed {
                message: err.to_string(),
            }
        })
    }

    /// Builds the viewer, letting explicit values override the settings.
    ///
    /// `viewer_override` replaces the configured viewer id, and
    /// `admin_override` is combined with the configured admin flag.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BlankViewerId`] when the resolved viewer id
    /// is empty or whitespace.
    pub fn viewer(
        &self,
        viewer_override: Option<&str>,
        admin_override: bool,
    ) -> Result<Viewer, SettingsError> {
        let id = match viewer_override.or(self.viewer_id.as_deref()) {
            Some(raw) if raw.trim().is_empty() => return Err(SettingsError::BlankViewerId),
            Some(raw) => Some(SubjectId::from(raw.trim())),
            None => None,
        };
        Ok(Viewer::new(id, self.is_admin || admin_override))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for preview settings loading and viewer resolution.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    fn settings(viewer_id: Option<&str>, is_admin: bool) -> PreviewSettings {
        PreviewSettings {
            viewer_id: viewer_id.map(str::to_owned),
            is_admin,
            json_logs: false,
        }
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("MEMBER_PREVIEW_VIEWER_ID", None::<String>),
            ("MEMBER_PREVIEW_IS_ADMIN", None::<String>),
            ("MEMBER_PREVIEW_JSON_LOGS", None::<String>),
        ]);

        let loaded = PreviewSettings::load().expect("config should load");
        assert!(loaded.viewer_id.is_none());
        assert!(!loaded.is_admin);
        assert!(!loaded.json_logs);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("MEMBER_PREVIEW_VIEWER_ID", Some("42".to_owned())),
            ("MEMBER_PREVIEW_IS_ADMIN", Some("true".to_owned())),
            ("MEMBER_PREVIEW_JSON_LOGS", Some("true".to_owned())),
        ]);

        let loaded = PreviewSettings::load().expect("config should load");
        assert_eq!(loaded.viewer_id.as_deref(), Some("42"));
        assert!(loaded.is_admin);
        assert!(loaded.json_logs);
    }

    #[rstest]
    #[case("42", "42")]
    #[case("u-42", "u-42")]
    fn numeric_and_textual_viewer_ids_load(#[case] raw: &str, #[case] expected: &str) {
        let _guard = lock_env([
            ("MEMBER_PREVIEW_VIEWER_ID", Some(raw.to_owned())),
            ("MEMBER_PREVIEW_IS_ADMIN", None),
            ("MEMBER_PREVIEW_JSON_LOGS", None),
        ]);

        let viewer = PreviewSettings::load()
            .expect("config should load")
            .viewer(None, false)
            .expect("viewer resolves");

        assert_eq!(viewer.id().map(SubjectId::as_str), Some(expected));
        assert!(!viewer.is_admin());
    }

    #[test]
    fn numeric_environment_viewer_does_not_block_explicit_viewer() {
        let _guard = lock_env([
            ("MEMBER_PREVIEW_VIEWER_ID", Some("2".to_owned())),
            ("MEMBER_PREVIEW_IS_ADMIN", None),
            ("MEMBER_PREVIEW_JSON_LOGS", None),
        ]);

        let viewer = PreviewSettings::load()
            .expect("config should load")
            .viewer(Some("1"), false)
            .expect("viewer resolves");

        assert_eq!(viewer.id().map(SubjectId::as_str), Some("1"));
    }

    #[rstest]
    #[case(None, None, None)]
    #[case(Some("7"), None, Some("7"))]
    #[case(None, Some("9"), Some("9"))]
    #[case(Some("7"), Some(" 9 "), Some("9"))]
    fn explicit_viewer_overrides_settings(
        #[case] configured: Option<&str>,
        #[case] explicit: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let viewer = settings(configured, false)
            .viewer(explicit, false)
            .expect("viewer resolves");

        assert_eq!(viewer.id().map(SubjectId::as_str), expected);
    }

    #[rstest]
    #[case(false, false, false)]
    #[case(true, false, true)]
    #[case(false, true, true)]
    fn admin_flag_is_combined(
        #[case] configured: bool,
        #[case] explicit: bool,
        #[case] expected: bool,
    ) {
        let viewer = settings(None, configured)
            .viewer(None, explicit)
            .expect("viewer resolves");

        assert_eq!(viewer.is_admin(), expected);
    }

    #[test]
    fn blank_viewer_is_rejected() {
        let result = settings(Some("   "), false).viewer(None, false);

        assert_eq!(result, Err(SettingsError::BlankViewerId));
    }
}
