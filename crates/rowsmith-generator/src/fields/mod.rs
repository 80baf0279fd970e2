//! Field-level value generators.
//!
//! This module provides the generation logic for individual field values,
//! plus the dispatch table that maps a custom-schema field definition to
//! its generation behavior. Unrecognized field types resolve to
//! [`ResolvedField::Filler`] rather than an error, so a malformed schema
//! degrades field content without failing the whole call.

pub mod numeric;
pub mod pattern;
pub mod person;
pub mod text;
pub mod timestamp;

use crate::generator::GeneratorError;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rowsmith_core::{FieldDefinition, FieldKind, Value};

/// Default bounds for `amount` fields without explicit constraints.
const DEFAULT_AMOUNT_BOUNDS: (f64, f64) = (0.0, 1000.0);

/// Default character cap for `text` fields.
const DEFAULT_TEXT_LENGTH: usize = 100;

/// Default options for `choice` fields without an options list.
const DEFAULT_CHOICE_OPTIONS: [&str; 2] = ["option1", "option2"];

/// Days covered by the default `date` window (one year back from now).
const DEFAULT_DATE_WINDOW_DAYS: i64 = 365;

/// Uniform pick from a fixed set of string options.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&str]) -> String {
    options[rng.random_range(0..options.len())].to_string()
}

/// A custom-schema field with its constraints resolved against defaults.
///
/// Resolution happens once per generation call; the per-record loop only
/// dispatches on the resolved variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedField {
    /// Dense 1-based sequence matching record position
    Id,
    /// Person name
    Name,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Single-line postal address
    Address,
    /// Amount uniform over [min, max], rounded to 2 decimal places
    Amount { min: f64, max: f64 },
    /// Timestamp uniform over [start, end]
    Date {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Uniform pick from the options list
    Choice { options: Vec<String> },
    /// Free text up to max_length characters
    Text { max_length: usize },
    /// Fallback for unrecognized field types - a single filler word
    Filler,
}

/// Resolve a field definition into its generation plan.
///
/// Malformed bounds are rejected here, before any record is generated:
/// an `amount` field with min > max and a `choice` field with an
/// explicitly empty options list are errors. Unparseable `date` bounds
/// fall back to the default window instead of failing.
pub fn resolve(def: &FieldDefinition) -> Result<ResolvedField, GeneratorError> {
    let constraints = &def.constraints;
    let resolved = match def.kind {
        FieldKind::Id => ResolvedField::Id,
        FieldKind::Name => ResolvedField::Name,
        FieldKind::Email => ResolvedField::Email,
        FieldKind::Phone => ResolvedField::Phone,
        FieldKind::Address => ResolvedField::Address,
        FieldKind::Amount => {
            let min = constraints.min.unwrap_or(DEFAULT_AMOUNT_BOUNDS.0);
            let max = constraints.max.unwrap_or(DEFAULT_AMOUNT_BOUNDS.1);
            if min > max {
                return Err(GeneratorError::InvalidAmountRange { min, max });
            }
            ResolvedField::Amount { min, max }
        }
        FieldKind::Date => {
            let now = Utc::now();
            let start = constraints
                .start
                .as_deref()
                .and_then(timestamp::parse_bound)
                .unwrap_or(now - Duration::days(DEFAULT_DATE_WINDOW_DAYS));
            let end = constraints
                .end
                .as_deref()
                .and_then(timestamp::parse_bound)
                .unwrap_or(now);
            ResolvedField::Date { start, end }
        }
        FieldKind::Choice => {
            let options = match &constraints.options {
                Some(options) if options.is_empty() => {
                    return Err(GeneratorError::EmptyChoiceOptions(def.name.clone()));
                }
                Some(options) => options.clone(),
                None => DEFAULT_CHOICE_OPTIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            };
            ResolvedField::Choice { options }
        }
        FieldKind::Text => ResolvedField::Text {
            max_length: constraints.max_length.unwrap_or(DEFAULT_TEXT_LENGTH),
        },
        FieldKind::Unknown => ResolvedField::Filler,
    };
    Ok(resolved)
}

/// Generate one value for a resolved field at the given record index.
pub fn generate<R: Rng + ?Sized>(field: &ResolvedField, rng: &mut R, index: usize) -> Value {
    match field {
        ResolvedField::Id => Value::Int(index as i64 + 1),
        ResolvedField::Name => Value::Str(person::full_name(rng)),
        ResolvedField::Email => Value::Str(person::email(rng)),
        ResolvedField::Phone => Value::Str(person::phone(rng)),
        ResolvedField::Address => Value::Str(person::address(rng)),
        ResolvedField::Amount { min, max } => {
            Value::Float(numeric::amount_between(rng, *min, *max))
        }
        ResolvedField::Date { start, end } => {
            Value::DateTime(timestamp::between(rng, *start, *end))
        }
        ResolvedField::Choice { options } => {
            Value::Str(options[rng.random_range(0..options.len())].clone())
        }
        ResolvedField::Text { max_length } => Value::Str(text::text_up_to(rng, *max_length)),
        ResolvedField::Filler => Value::Str(text::word(rng)),
    }
}
