//! Contributor records and the fixed set of contribution roles.

/// The fixed set of contribution roles a person can hold on a title.
///
/// The XML export lower-cases the role name (`Author` becomes `author`);
/// see [`ContributorRole::xml_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContributorRole {
    #[default]
    Author,
    Editor,
    Illustrator,
    Photographer,
    Drawer,
    VolumeEditor,
    SeriesEditor,
    FoundedBy,
    PrefaceBy,
    ForewordBy,
    IntroductionBy,
    AfterwordBy,
    NotesBy,
    CommentariesBy,
    ContributionsBy,
    RevisedBy,
    AdaptedBy,
    TranslatedBy,
    CompiledBy,
    SelectedBy,
}

impl ContributorRole {
    /// All roles, in the order the role selector offers them.
    pub const ALL: [ContributorRole; 20] = [
        ContributorRole::Author,
        ContributorRole::Editor,
        ContributorRole::Illustrator,
        ContributorRole::Photographer,
        ContributorRole::Drawer,
        ContributorRole::VolumeEditor,
        ContributorRole::SeriesEditor,
        ContributorRole::FoundedBy,
        ContributorRole::PrefaceBy,
        ContributorRole::ForewordBy,
        ContributorRole::IntroductionBy,
        ContributorRole::AfterwordBy,
        ContributorRole::NotesBy,
        ContributorRole::CommentariesBy,
        ContributorRole::ContributionsBy,
        ContributorRole::RevisedBy,
        ContributorRole::AdaptedBy,
        ContributorRole::TranslatedBy,
        ContributorRole::CompiledBy,
        ContributorRole::SelectedBy,
    ];

    /// The role name as offered to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributorRole::Author => "Author",
            ContributorRole::Editor => "Editor",
            ContributorRole::Illustrator => "Illustrator",
            ContributorRole::Photographer => "Photographer",
            ContributorRole::Drawer => "Drawer",
            ContributorRole::VolumeEditor => "VolumeEditor",
            ContributorRole::SeriesEditor => "SeriesEditor",
            ContributorRole::FoundedBy => "FoundedBy",
            ContributorRole::PrefaceBy => "PrefaceBy",
            ContributorRole::ForewordBy => "ForewordBy",
            ContributorRole::IntroductionBy => "IntroductionBy",
            ContributorRole::AfterwordBy => "AfterwordBy",
            ContributorRole::NotesBy => "NotesBy",
            ContributorRole::CommentariesBy => "CommentariesBy",
            ContributorRole::ContributionsBy => "ContributionsBy",
            ContributorRole::RevisedBy => "RevisedBy",
            ContributorRole::AdaptedBy => "AdaptedBy",
            ContributorRole::TranslatedBy => "TranslatedBy",
            ContributorRole::CompiledBy => "CompiledBy",
            ContributorRole::SelectedBy => "SelectedBy",
        }
    }

    /// The lower-cased form used as `ContributorRole` element text.
    pub fn xml_name(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }

    /// Parse a role from its selector name.
    pub fn parse(s: &str) -> Option<ContributorRole> {
        ContributorRole::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl std::fmt::Display for ContributorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One person contributing to a title.
///
/// Last and first name are required by the entry form before a contributor
/// can be added; the validator only requires that at least one contributor
/// exists for an upload. ISNI and ORCID are plain numeric strings, bio is
/// free text; all three are optional and omitted from the XML when empty
/// (ISNI/ORCID are captured for future schema revisions and not serialized).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorRecord {
    pub role: ContributorRole,
    pub last_name: String,
    pub first_name: String,
    pub isni: String,
    pub orcid: String,
    pub short_bio: String,
}

impl ContributorRecord {
    /// The `ContributorName` element text, `"Last, First"`.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_list_is_complete() {
        assert_eq!(ContributorRole::ALL.len(), 20);
        for role in ContributorRole::ALL {
            assert_eq!(ContributorRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_xml_name_is_lower_cased() {
        assert_eq!(ContributorRole::Author.xml_name(), "author");
        assert_eq!(ContributorRole::VolumeEditor.xml_name(), "volumeeditor");
        assert_eq!(ContributorRole::TranslatedBy.xml_name(), "translatedby");
    }

    #[test]
    fn test_display_name() {
        let c = ContributorRecord {
            last_name: "Lindgren".into(),
            first_name: "Astrid".into(),
            ..Default::default()
        };
        assert_eq!(c.display_name(), "Lindgren, Astrid");
    }
}
