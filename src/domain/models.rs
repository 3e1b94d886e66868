use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A TV series as handed over by a record factory.
///
/// `name` is private and only readable through [`Series::name`], but it is
/// still part of the serialized form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Series {
    name: String,
    /// The seasons of the series, usually just how many there are
    pub seasons: Seasons,
}

/// How many seasons a series has, or the seasons themselves.
///
/// Numbers deserialize to `Count`, arrays to `List`, and anything else is
/// kept untouched in `Other`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Seasons {
    /// A number of seasons (not necessarily a whole one)
    Count(Number),
    /// One value per season
    List(Vec<Value>),
    /// Any other value
    Other(Value),
}

impl Seasons {
    /// A whole number of seasons
    pub fn count(count: u64) -> Self {
        Seasons::Count(count.into())
    }

    pub fn to_value(&self) -> Value {
        match self {
            Seasons::Count(count) => Value::Number(count.clone()),
            Seasons::List(seasons) => Value::Array(seasons.clone()),
            Seasons::Other(value) => value.clone(),
        }
    }
}

impl Series {
    /// Creates a series from its name and seasons
    pub fn new(name: impl Into<String>, seasons: Seasons) -> Self {
        Self {
            name: name.into(),
            seasons,
        }
    }

    /// The name of the series
    pub fn name(&self) -> &str {
        &self.name
    }
}
