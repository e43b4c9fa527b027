//! Help text for raidscout commands.

use std::sync::LazyLock;

use crate::aliases::supported_region_aliases;

static HELP_TEXT: LazyLock<String> = LazyLock::new(|| {
    format!(
        r#"Example: !raid bfa asmongold us kel'thuzad
Commands:
  !char <character> <region> <realm>              - Character summary
  !raid <expansion> <character> <region> <realm>  - Raid progress for an expansion
  !help                                           - Show this message
Regions: {}
Put realm names with spaces in quotes, e.g. "area 52".
"#,
        supported_region_aliases().join(", ")
    )
});

/// Returns the help text for the !help command.
pub fn help_text() -> &'static str {
    &HELP_TEXT
}
