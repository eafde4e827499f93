//! Output document entries.

use serde::{Deserialize, Serialize};

use super::profile::CanonicalProfile;
use super::status::{CanonicalStatus, StatusKind};

/// One entry of the output array.
///
/// Serialized untagged: consumers tell the kinds apart by the `type` key,
/// which statuses carry and profiles do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    /// A post or reply. Listed first so deserialization tries the tagged
    /// shape before the untagged one.
    Status(CanonicalStatus),
    /// An account profile.
    Profile(CanonicalProfile),
}

impl Record {
    /// Returns the status kind, or `None` for a profile.
    pub fn status_kind(&self) -> Option<StatusKind> {
        match self {
            Self::Status(status) => Some(status.kind),
            Self::Profile(_) => None,
        }
    }

    /// Returns true if this is a profile record.
    pub fn is_profile(&self) -> bool {
        matches!(self, Self::Profile(_))
    }
}

impl From<CanonicalProfile> for Record {
    fn from(profile: CanonicalProfile) -> Self {
        Self::Profile(profile)
    }
}

impl From<CanonicalStatus> for Record {
    fn from(status: CanonicalStatus) -> Self {
        Self::Status(status)
    }
}
