use serde::{de, Deserialize, Deserializer, Serialize};

/// Store-assigned identifier, shared by both record kinds.
pub type Id = i64;

/// Reference to an owning team as it appears in a player request body.
///
/// Clients either send the bare id or echo back the embedded team object
/// they received earlier, in which case only its `id` is read. Form-driven
/// clients send the id as a numeric string, which is accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamRef {
    Id(#[serde(deserialize_with = "id_from_number_or_string")] Id),
    Object {
        #[serde(deserialize_with = "id_from_number_or_string")]
        id: Id,
    },
}

impl TeamRef {
    pub fn id(&self) -> Id {
        match self {
            TeamRef::Id(id) => *id,
            TeamRef::Object { id } => *id,
        }
    }
}

impl From<Id> for TeamRef {
    fn from(id: Id) -> Self {
        TeamRef::Id(id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(Id),
    Text(String),
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<Id, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid id: {:?}", text))),
    }
}

/// Treat an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
