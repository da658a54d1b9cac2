use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct HookModel {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct HookWorkspace {
    #[serde(deserialize_with = "null_as_default")]
    pub current_dir: String,
    #[serde(deserialize_with = "null_as_default")]
    pub project_dir: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct OutputStyle {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Aggregate cost summary provided by Claude Code's statusLine input
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct HookCost {
    #[serde(deserialize_with = "null_as_default")]
    pub total_cost_usd: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_duration_ms: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_api_duration_ms: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_lines_added: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_lines_removed: i64,
}

/// Session snapshot piped on stdin for every statusline refresh.
///
/// Every field defaults, so a partial (or empty) object still parses and only
/// the sections relying on the missing data degrade.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct HookJson {
    #[serde(deserialize_with = "null_as_default")]
    pub hook_event_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transcript_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cwd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: HookModel,
    #[serde(deserialize_with = "null_as_default")]
    pub workspace: HookWorkspace,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub output_style: OutputStyle,
    #[serde(deserialize_with = "null_as_default")]
    pub cost: HookCost,
}
