use crate::domain::model::Profile;

/// What happens when a button on the page is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Opens a fixed URL in a new browsing context.
    External { href: String },
    /// Replaces the current location with a `mailto:` URL.
    Mail { address: String },
}

impl LinkAction {
    pub fn external(href: impl Into<String>) -> Self {
        LinkAction::External { href: href.into() }
    }

    pub fn mailto(address: impl Into<String>) -> Self {
        LinkAction::Mail {
            address: address.into(),
        }
    }

    pub fn href(&self) -> String {
        match self {
            LinkAction::External { href } => href.clone(),
            LinkAction::Mail { address } => format!("mailto:{}", address),
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        match self {
            LinkAction::External { .. } => Some("_blank"),
            LinkAction::Mail { .. } => None,
        }
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.target().map(|_| "noopener noreferrer")
    }
}

/// The fixed outbound links of a profile.
#[derive(Debug, Clone)]
pub struct ProfileLinks {
    pub cv: LinkAction,
    pub linkedin: LinkAction,
    pub thesis: LinkAction,
    pub email: LinkAction,
}

impl ProfileLinks {
    pub fn for_profile(profile: &Profile) -> Self {
        let personal = &profile.personal;
        Self {
            cv: LinkAction::external(&personal.cv_url),
            linkedin: LinkAction::external(&personal.linkedin),
            thesis: LinkAction::external(&personal.thesis),
            email: LinkAction::mailto(&personal.email),
        }
    }
}
