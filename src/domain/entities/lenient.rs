//! Field deserializers that degrade instead of failing.
//!
//! Candidate and position records come from external collaborators. A null
//! or wrongly shaped optional field falls back to its default with a warning,
//! so one bad attribute never costs the whole record.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

use crate::domain::value_objects::{ElementalProfile, Tag};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Null,
    Invalid(IgnoredAny),
}

/// `Some` for a well-formed value, `None` for null or anything malformed
fn lenient<'de, D, T>(deserializer: D, what: &'static str) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Valid(value) => Some(value),
        Lenient::Null => None,
        Lenient::Invalid(_) => {
            tracing::warn!(field = what, "ignoring malformed value");
            None
        }
    })
}

/// Well-formed value or the type's default
pub(super) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let what = std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("value");
    Ok(lenient(deserializer, what)?.unwrap_or_default())
}

/// Optional string; non-strings become `None`
pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient(deserializer, "text")
}

/// Boolean flag; anything but `true`/`false` reads as `false`
pub(super) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer, "flag")?.unwrap_or(false))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Number, also accepted as a numeric string
pub(super) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match lenient(deserializer, "number")? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(raw)) => match raw.trim().parse::<f64>() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::warn!(value = raw.as_str(), "ignoring non-numeric value");
                None
            }
        },
        None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// A single name or a list of names
fn names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match lenient(deserializer, "names")? {
        Some(OneOrMany::One(name)) => vec![name],
        Some(OneOrMany::Many(names)) => names,
        None => Vec::new(),
    })
}

/// Names parsed into a closed set; unrecognised names are dropped
pub(super) fn name_set<'de, D, T>(deserializer: D) -> Result<BTreeSet<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Ord,
    T::Err: Display,
{
    Ok(names(deserializer)?
        .iter()
        .filter_map(|name| match name.parse::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "dropping unrecognised name");
                None
            }
        })
        .collect())
}

/// Free-form tags from a single name or a list
pub(super) fn tag_set<'de, D>(deserializer: D) -> Result<BTreeSet<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(names(deserializer)?.iter().map(Tag::new).collect())
}

/// Elemental profile; malformed profiles are treated as absent
pub(super) fn profile<'de, D>(deserializer: D) -> Result<Option<ElementalProfile>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient(deserializer, "elemental profile")
}
