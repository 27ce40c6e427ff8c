use std::path::PathBuf;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// New settings dump to be compared with the template
    pub new_settings: PathBuf,

    /// Template settings dump the new settings are compared against
    pub template_settings: PathBuf,

    /// Optional category table for annotation
    pub categories: Option<PathBuf>,

    /// Report destination (None = stdout)
    pub output: Option<PathBuf>,

    /// Emit the report as JSON instead of the delimited table
    pub json: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            new_settings: PathBuf::from("new-settings.txt"),
            template_settings: PathBuf::from("template-settings.txt"),
            categories: None,
            output: None,
            json: false,
        }
    }
}
