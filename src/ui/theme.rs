/// Design tokens for legis tree output.
///
/// All checkbox and tree glyphs must be sourced from this module.
pub mod icons {
    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree branches.
    pub const BRANCH: &str = "├─ ";
    pub const LAST_BRANCH: &str = "└─ ";
    pub const PIPE: &str = "│  ";
}

pub mod icons_ascii {
    // Selection states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    // Tree branches.
    pub const BRANCH: &str = "|- ";
    pub const LAST_BRANCH: &str = "`- ";
    pub const PIPE: &str = "|  ";
}

/// Glyph set picked once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub selected: &'static str,
    pub unselected: &'static str,
    pub partial: &'static str,
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub pipe: &'static str,
}

impl Glyphs {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                selected: icons::SELECTED,
                unselected: icons::UNSELECTED,
                partial: icons::PARTIAL,
                branch: icons::BRANCH,
                last_branch: icons::LAST_BRANCH,
                pipe: icons::PIPE,
            }
        } else {
            Self {
                selected: icons_ascii::SELECTED,
                unselected: icons_ascii::UNSELECTED,
                partial: icons_ascii::PARTIAL,
                branch: icons_ascii::BRANCH,
                last_branch: icons_ascii::LAST_BRANCH,
                pipe: icons_ascii::PIPE,
            }
        }
    }
}
