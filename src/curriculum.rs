//! CV content: identity, contact details and the entry sections.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::context::Context;
use crate::entry::{
    Entry, EntryKind, InstitutionEntry, NamedEntry, PositionEntry, SingleLineEntry,
};
use crate::error::ConstraintError;
use crate::raw::{RawCurriculum, RawSocialNetwork};
use crate::validators::{self, required_text, PhoneNumber};

/// Supported social networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Network {
    LinkedIn,
    GitHub,
    Instagram,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::LinkedIn, Network::GitHub, Network::Instagram];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::LinkedIn => "LinkedIn",
            Network::GitHub => "GitHub",
            Network::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| ConstraintError::UnknownNetwork(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialAccount {
    pub network: Network,
    pub username: String,
}

impl SocialAccount {
    fn from_raw(raw: RawSocialNetwork, ctx: &mut Context) -> Option<Self> {
        let network = ctx.check("network", raw.network.parse::<Network>());
        let username = ctx.check("username", required_text(raw.username));
        Some(Self {
            network: network?,
            username: username?,
        })
    }
}

/// What a connection points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConnectionKind {
    LinkedIn,
    GitHub,
    Instagram,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "website")]
    Website,
}

impl From<Network> for ConnectionKind {
    fn from(network: Network) -> Self {
        match network {
            Network::LinkedIn => ConnectionKind::LinkedIn,
            Network::GitHub => ConnectionKind::GitHub,
            Network::Instagram => ConnectionKind::Instagram,
        }
    }
}

/// A contact method, derived from the curriculum's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    #[serde(rename = "name")]
    pub kind: ConnectionKind,
    pub value: String,
}

/// Contact connections in display order: phone, email, website, then each social account.
pub fn derive_connections(
    phone: Option<&PhoneNumber>,
    email: Option<&str>,
    website: Option<&Url>,
    social_accounts: &[SocialAccount],
) -> Vec<Connection> {
    let mut connections = Vec::new();

    if let Some(phone) = phone {
        connections.push(Connection {
            kind: ConnectionKind::Phone,
            value: phone.to_string(),
        });
    }
    if let Some(email) = email {
        connections.push(Connection {
            kind: ConnectionKind::Email,
            value: email.to_string(),
        });
    }
    if let Some(website) = website {
        connections.push(Connection {
            kind: ConnectionKind::Website,
            value: website.to_string(),
        });
    }
    for account in social_accounts {
        connections.push(Connection {
            kind: account.network.into(),
            value: account.username.clone(),
        });
    }

    connections
}

/// One non-empty section, ready for a renderer to walk.
pub struct Section<'a> {
    /// Input key, e.g. `work_experience`.
    pub key: &'static str,
    /// Heading, e.g. `Work Experience`.
    pub title: &'static str,
    pub kind: EntryKind,
    pub entries: Vec<&'a dyn Entry>,
}

fn section<'a, E: Entry + 'a>(
    key: &'static str,
    title: &'static str,
    kind: EntryKind,
    entries: &'a [E],
) -> Option<Section<'a>> {
    if entries.is_empty() {
        return None;
    }
    Some(Section {
        key,
        title,
        kind,
        entries: entries.iter().map(|e| e as &dyn Entry).collect(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curriculum {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    website: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(rename = "social_networks", skip_serializing_if = "Vec::is_empty")]
    social_accounts: Vec<SocialAccount>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    education: Vec<InstitutionEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    work_experience: Vec<PositionEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    academic_projects: Vec<NamedEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    personal_projects: Vec<NamedEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    certificates: Vec<NamedEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extracurricular_activities: Vec<PositionEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    test_scores: Vec<SingleLineEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skills: Vec<SingleLineEntry>,
    connections: Vec<Connection>,
}

impl Curriculum {
    pub(crate) fn from_raw(raw: RawCurriculum, ctx: &mut Context) -> Option<Self> {
        let name = ctx.check("name", required_text(raw.name));
        let email = ctx.check_optional("email", raw.email, |v| validators::email(&v));
        let phone = ctx.check_optional("phone", raw.phone, |v| PhoneNumber::parse(&v));
        let website = ctx.check_optional("website", raw.website, |v| validators::http_url(&v));

        let social_accounts = ctx.each(
            "social_networks",
            raw.social_networks.unwrap_or_default(),
            SocialAccount::from_raw,
        );

        let education = ctx.each(
            "education",
            raw.education.unwrap_or_default(),
            InstitutionEntry::from_raw,
        );
        let work_experience = ctx.each(
            "work_experience",
            raw.work_experience.unwrap_or_default(),
            PositionEntry::from_raw,
        );
        let academic_projects = ctx.each(
            "academic_projects",
            raw.academic_projects.unwrap_or_default(),
            NamedEntry::from_raw,
        );
        let personal_projects = ctx.each(
            "personal_projects",
            raw.personal_projects.unwrap_or_default(),
            NamedEntry::from_raw,
        );
        let certificates = ctx.each(
            "certificates",
            raw.certificates.unwrap_or_default(),
            NamedEntry::from_raw,
        );
        let extracurricular_activities = ctx.each(
            "extracurricular_activities",
            raw.extracurricular_activities.unwrap_or_default(),
            PositionEntry::from_raw,
        );
        let test_scores = ctx.each(
            "test_scores",
            raw.test_scores.unwrap_or_default(),
            SingleLineEntry::from_raw,
        );
        let skills = ctx.each(
            "skills",
            raw.skills.unwrap_or_default(),
            SingleLineEntry::from_raw,
        );

        let connections = derive_connections(
            phone.as_ref(),
            email.as_deref(),
            website.as_ref(),
            &social_accounts,
        );

        Some(Self {
            name: name?,
            email,
            phone,
            website,
            location: raw.location,
            social_accounts,
            education,
            work_experience,
            academic_projects,
            personal_projects,
            certificates,
            extracurricular_activities,
            test_scores,
            skills,
            connections,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn website(&self) -> Option<&Url> {
        self.website.as_ref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn social_accounts(&self) -> &[SocialAccount] {
        &self.social_accounts
    }

    pub fn education(&self) -> &[InstitutionEntry] {
        &self.education
    }

    pub fn work_experience(&self) -> &[PositionEntry] {
        &self.work_experience
    }

    pub fn academic_projects(&self) -> &[NamedEntry] {
        &self.academic_projects
    }

    pub fn personal_projects(&self) -> &[NamedEntry] {
        &self.personal_projects
    }

    pub fn certificates(&self) -> &[NamedEntry] {
        &self.certificates
    }

    pub fn extracurricular_activities(&self) -> &[PositionEntry] {
        &self.extracurricular_activities
    }

    pub fn test_scores(&self) -> &[SingleLineEntry] {
        &self.test_scores
    }

    pub fn skills(&self) -> &[SingleLineEntry] {
        &self.skills
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Non-empty sections in display order.
    pub fn sections(&self) -> Vec<Section<'_>> {
        [
            section("education", "Education", EntryKind::Institution, &self.education),
            section(
                "work_experience",
                "Work Experience",
                EntryKind::Position,
                &self.work_experience,
            ),
            section(
                "academic_projects",
                "Academic Projects",
                EntryKind::Named,
                &self.academic_projects,
            ),
            section(
                "personal_projects",
                "Personal Projects",
                EntryKind::Named,
                &self.personal_projects,
            ),
            section(
                "certificates",
                "Certificates",
                EntryKind::Named,
                &self.certificates,
            ),
            section(
                "extracurricular_activities",
                "Extracurricular Activities",
                EntryKind::Position,
                &self.extracurricular_activities,
            ),
            section(
                "test_scores",
                "Test Scores",
                EntryKind::SingleLine,
                &self.test_scores,
            ),
            section("skills", "Skills", EntryKind::SingleLine, &self.skills),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
