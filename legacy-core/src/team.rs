use crate::config::TeamMember;

const PLACEHOLDER_HANDLE: &str = "@proximamente";

/// Badge shown on a roster card; the first slot belongs to the owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRole {
    Owner,
    ComingSoon,
}

impl TeamRole {
    #[must_use]
    pub const fn for_position(index: usize) -> Self {
        if index == 0 {
            Self::Owner
        } else {
            Self::ComingSoon
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Owner => "team.role.owner",
            Self::ComingSoon => "team.role.coming_soon",
        }
    }

    /// Gradient classes for the role badge.
    #[must_use]
    pub const fn gradient(self) -> &'static str {
        match self {
            Self::Owner => "from-yellow-400 to-orange-500",
            Self::ComingSoon => "from-gray-400 to-gray-600",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Owner => "icon-crown",
            Self::ComingSoon => "icon-message-circle",
        }
    }
}

/// Display data for one roster card
///
/// `name` and `subtitle` are `None` when the configuration leaves them out; the
/// view then shows the translated role label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCard {
    pub id: String,
    pub role: TeamRole,
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub avatar: String,
    pub handle: String,
}

impl TeamCard {
    #[must_use]
    pub fn from_member(member: &TeamMember, index: usize) -> Self {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let handle = non_empty(&member.discord).map_or_else(
            || PLACEHOLDER_HANDLE.to_string(),
            |h| {
                if h.starts_with('@') {
                    h
                } else {
                    format!("@{h}")
                }
            },
        );
        Self {
            id: member.id.clone(),
            role: TeamRole::for_position(index),
            name: non_empty(&member.name),
            subtitle: non_empty(&member.role),
            avatar: member.avatar.clone(),
            handle,
        }
    }

    /// Cards for the whole roster, in configuration order.
    #[must_use]
    pub fn roster(members: &[TeamMember]) -> Vec<Self> {
        members
            .iter()
            .enumerate()
            .map(|(index, member)| Self::from_member(member, index))
            .collect()
    }
}
