use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a component within one vessel's record set.
pub type ComponentId = u64;

/// Parent id meaning "no parent": the component is a root of the hierarchy.
pub const ROOT_PARENT_ID: ComponentId = 0;

/// Condition value counted as "normal" by the statistics.
pub const NORMAL_CONDITION: &str = "Normal";

/// Read-only joined reference (manufacturer, vendor, location, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReference {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// One equipment record of a vessel, as returned by the component API.
///
/// `parent_component_id == ROOT_PARENT_ID` marks a root. `running_hours` is
/// never read from the wire; it is derived from `last_condition_date` by
/// `RunningHoursCalculator::annotate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: ComponentId,
    #[serde(default, deserialize_with = "string_or_number")]
    pub vessel_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_component_id: ComponentId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_mounted: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub serial_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_spec: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub installation_desc: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remarks: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_path: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub last_condition: String,
    /// Epoch milliseconds as stored by the API. Kept raw; may be malformed.
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub last_condition_date: Option<String>,
    #[serde(skip_deserializing)]
    pub running_hours: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_critical: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub critical_desc: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub critical_level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_major_component: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_circulating_component: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_grouped_component: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_component_lending: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<ComponentReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<ComponentReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ComponentReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<ComponentReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owning_type: Option<ComponentReference>,
}

impl Component {
    /// True when the record declares no parent.
    pub fn is_root_declared(&self) -> bool {
        self.parent_component_id == ROOT_PARENT_ID
    }

    pub fn is_normal(&self) -> bool {
        self.last_condition == NORMAL_CONDITION
    }
}

/// The API sends `null` for unset scalars; treat it like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_string_or_number(deserializer)?.unwrap_or_default())
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}
