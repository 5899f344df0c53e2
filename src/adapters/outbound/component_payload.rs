use crate::component_hierarchy::domain::Component;
use serde::Deserialize;

/// Body of a component list, as served by the fleet API or exported to a
/// snapshot file
///
/// The API answers with a bare array, some gateways wrap it in `data`.
/// Both shapes are accepted wherever a component list is read.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ComponentPayload {
    List(Vec<Component>),
    Wrapped { data: Vec<Component> },
}

impl ComponentPayload {
    pub(crate) fn parse(body: &str) -> serde_json::Result<Vec<Component>> {
        serde_json::from_str::<Self>(body).map(Self::into_components)
    }

    fn into_components(self) -> Vec<Component> {
        match self {
            ComponentPayload::List(components) => components,
            ComponentPayload::Wrapped { data } => data,
        }
    }
}
