//! Main record generator for the built-in entity shapes and custom
//! schemas.

use crate::fields::{self, numeric, pattern, person, text, timestamp, pick};
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rowsmith_core::{CustomSchema, Record, Value};
use std::str::FromStr;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Amount range with min greater than max
    #[error("invalid amount range: min {min} is greater than max {max}")]
    InvalidAmountRange { min: f64, max: f64 },

    /// Year outside the representable timestamp range
    #[error("year {0} is outside the supported timestamp range")]
    InvalidYear(i32),

    /// Choice field with an explicitly empty options list
    #[error("choice field '{0}' has an empty options list")]
    EmptyChoiceOptions(String),

    /// Unrecognized user field name in an include-list
    #[error("unknown user field: {0}")]
    UnknownUserField(String),
}

/// Order statuses, drawn uniformly.
pub const ORDER_STATUSES: [&str; 4] = ["pending", "completed", "cancelled", "shipped"];

/// Default payment methods when the caller supplies none.
pub const DEFAULT_PAYMENT_METHODS: [&str; 4] =
    ["credit_card", "debit_card", "paypal", "bank_transfer"];

/// Payment gateways, drawn uniformly.
pub const GATEWAYS: [&str; 4] = ["stripe", "paypal", "square", "authorize_net"];

/// Failure reasons attached to failed transactions.
pub const FAILURE_REASONS: [&str; 3] = ["insufficient_funds", "card_declined", "network_error"];

/// Product categories, drawn uniformly.
pub const PRODUCT_CATEGORIES: [&str; 6] = [
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports",
    "Beauty",
];

/// Probability that a transaction fails when failures are enabled.
pub const FAILURE_RATE: f64 = 0.1;

/// Statuses for transactions that did not fail.
const SETTLED_STATUSES: [&str; 3] = ["completed", "pending", "refunded"];

/// SKU shape: three letters, three digits, three letters.
const SKU_PATTERN: &str = "???-###-???";

/// The six user fields, in declared record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Name,
    Email,
    Phone,
    Address,
    CreatedAt,
}

impl UserField {
    /// All user fields in declared order.
    pub const ALL: [UserField; 6] = [
        UserField::Id,
        UserField::Name,
        UserField::Email,
        UserField::Phone,
        UserField::Address,
        UserField::CreatedAt,
    ];

    /// The field name as it appears in generated records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::CreatedAt => "created_at",
        }
    }
}

impl FromStr for UserField {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "created_at" => Ok(Self::CreatedAt),
            other => Err(GeneratorError::UnknownUserField(other.to_string())),
        }
    }
}

/// Options for order generation.
#[derive(Debug, Clone)]
pub struct OrderOptions {
    /// Pool of user ids to assign orders to; uniform in [1, 100] if absent
    pub user_ids: Option<Vec<i64>>,

    /// Inclusive (min, max) bounds for the order amount
    pub amount_range: (f64, f64),

    /// Calendar year for order dates; Jan 1 of the current year through
    /// now if absent
    pub year: Option<i32>,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            user_ids: None,
            amount_range: (10.0, 500.0),
            year: None,
        }
    }
}

/// Options for payment transaction generation.
#[derive(Debug, Clone)]
pub struct PaymentOptions {
    /// Payment methods to draw from; the default four if empty
    pub methods: Vec<String>,

    /// Whether ~10% of transactions fail
    pub include_failed: bool,
}

impl Default for PaymentOptions {
    fn default() -> Self {
        Self {
            methods: DEFAULT_PAYMENT_METHODS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            include_failed: true,
        }
    }
}

/// Synthetic record generator.
///
/// Each generation call is independent: shape and ordering are
/// deterministic, content comes from the owned RNG. The generator
/// enforces no row cap; limiting record counts is the caller's policy.
pub struct RecordGenerator {
    rng: StdRng,
}

impl RecordGenerator {
    /// Create a generator with an OS-seeded RNG.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` user records.
    ///
    /// `include_fields` restricts which of the six user fields are
    /// populated; omitted fields are absent from the records entirely.
    /// `created_at` is uniform over the two years before now.
    pub fn users(&mut self, count: usize, include_fields: Option<&[UserField]>) -> Vec<Record> {
        let include = include_fields.unwrap_or(&UserField::ALL);
        let now = Utc::now();
        let window_start = now - Duration::days(2 * 365);

        (0..count)
            .map(|i| {
                let mut builder = Record::builder();
                for field in &UserField::ALL {
                    if !include.contains(field) {
                        continue;
                    }
                    builder = match field {
                        UserField::Id => builder.field("id", i as i64 + 1),
                        UserField::Name => builder.field("name", person::full_name(&mut self.rng)),
                        UserField::Email => builder.field("email", person::email(&mut self.rng)),
                        UserField::Phone => builder.field("phone", person::phone(&mut self.rng)),
                        UserField::Address => {
                            builder.field("address", person::address(&mut self.rng))
                        }
                        UserField::CreatedAt => builder.field(
                            "created_at",
                            timestamp::between(&mut self.rng, window_start, now),
                        ),
                    };
                }
                builder.build()
            })
            .collect()
    }

    /// Generate `count` order records.
    ///
    /// Rejects an amount range with min > max and a year that does not
    /// map to valid timestamps.
    pub fn orders(
        &mut self,
        count: usize,
        opts: &OrderOptions,
    ) -> Result<Vec<Record>, GeneratorError> {
        let (min, max) = opts.amount_range;
        if min > max {
            return Err(GeneratorError::InvalidAmountRange { min, max });
        }
        let (start, end) = order_date_window(opts.year)?;

        let records = (0..count)
            .map(|i| {
                let user_id = match opts.user_ids.as_deref() {
                    Some(ids) if !ids.is_empty() => ids[self.rng.random_range(0..ids.len())],
                    _ => self.rng.random_range(1..=100),
                };
                Record::builder()
                    .field("id", i as i64 + 1)
                    .field("user_id", user_id)
                    .field("amount", numeric::amount_between(&mut self.rng, min, max))
                    .field("status", pick(&mut self.rng, &ORDER_STATUSES))
                    .field("order_date", timestamp::between(&mut self.rng, start, end))
                    .field("product_name", text::two_words(&mut self.rng))
                    .field("quantity", self.rng.random_range(1..=10i64))
                    .build()
            })
            .collect();

        Ok(records)
    }

    /// Generate `count` payment transaction records.
    ///
    /// When failures are enabled each record independently fails with
    /// 10% probability; failed records carry status "failed" and a
    /// non-null failure_reason, all others carry a null failure_reason.
    pub fn payment_transactions(&mut self, count: usize, opts: &PaymentOptions) -> Vec<Record> {
        let methods: Vec<&str> = if opts.methods.is_empty() {
            DEFAULT_PAYMENT_METHODS.to_vec()
        } else {
            opts.methods.iter().map(String::as_str).collect()
        };
        let now = Utc::now();
        let window_start = now - Duration::days(365);

        (0..count)
            .map(|i| {
                let is_failed = opts.include_failed && self.rng.random_bool(FAILURE_RATE);
                let status = if is_failed {
                    "failed".to_string()
                } else {
                    pick(&mut self.rng, &SETTLED_STATUSES)
                };
                let failure_reason = if is_failed {
                    Value::Str(pick(&mut self.rng, &FAILURE_REASONS))
                } else {
                    Value::Null
                };
                let method = methods[self.rng.random_range(0..methods.len())];
                Record::builder()
                    .field("id", i as i64 + 1)
                    .field("order_id", self.rng.random_range(1..=1000i64))
                    .field("amount", numeric::amount_between(&mut self.rng, 5.0, 1000.0))
                    .field("payment_method", method)
                    .field("status", status)
                    .field(
                        "transaction_date",
                        timestamp::between(&mut self.rng, window_start, now),
                    )
                    .field("gateway", pick(&mut self.rng, &GATEWAYS))
                    .field("failure_reason", failure_reason)
                    .build()
            })
            .collect()
    }

    /// Generate up to `count` failed payment transactions.
    ///
    /// Over-generates 2x`count` transactions with failures enabled and
    /// keeps the failed ones. Best-effort: when the random draw
    /// undershoots the 10% failure rate this returns fewer than `count`
    /// records. Surviving records are re-numbered densely from 1.
    pub fn failed_payment_transactions(&mut self, count: usize) -> Vec<Record> {
        let pool = self.payment_transactions(count * 2, &PaymentOptions::default());
        let mut failed: Vec<Record> = pool
            .into_iter()
            .filter(|record| record.get("status").and_then(Value::as_str) == Some("failed"))
            .take(count)
            .collect();

        if failed.len() < count {
            debug!(
                requested = count,
                produced = failed.len(),
                "failed-transaction draw undershot"
            );
        }

        for (i, record) in failed.iter_mut().enumerate() {
            record.set("id", Value::Int(i as i64 + 1));
        }
        failed
    }

    /// Generate `count` product records.
    pub fn products(&mut self, count: usize) -> Vec<Record> {
        let now = Utc::now();
        let window_start = now - Duration::days(365);

        (0..count)
            .map(|i| {
                Record::builder()
                    .field("id", i as i64 + 1)
                    .field("name", text::two_words(&mut self.rng))
                    .field("description", text::text_up_to(&mut self.rng, 200))
                    .field(
                        "price",
                        numeric::amount_between(&mut self.rng, 10.0, 1000.0),
                    )
                    .field("category", pick(&mut self.rng, &PRODUCT_CATEGORIES))
                    .field("sku", pattern::fill(&mut self.rng, SKU_PATTERN))
                    .field("stock_quantity", self.rng.random_range(0..=100i64))
                    .field(
                        "created_at",
                        timestamp::between(&mut self.rng, window_start, now),
                    )
                    .build()
            })
            .collect()
    }

    /// Generate `count` records from a custom schema.
    ///
    /// Constraints are resolved once up front; malformed amount bounds
    /// and empty choice lists are rejected before any record is built.
    /// Unrecognized field types degrade to a filler word per field and
    /// never fail the call.
    pub fn custom(
        &mut self,
        schema: &CustomSchema,
        count: usize,
    ) -> Result<Vec<Record>, GeneratorError> {
        let plan: Vec<(&str, fields::ResolvedField)> = schema
            .fields
            .iter()
            .map(|def| Ok((def.name.as_str(), fields::resolve(def)?)))
            .collect::<Result<_, GeneratorError>>()?;

        Ok((0..count)
            .map(|i| {
                let mut builder = Record::builder();
                for (name, resolved) in &plan {
                    builder = builder.field(*name, fields::generate(resolved, &mut self.rng, i));
                }
                builder.build()
            })
            .collect())
    }
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the [start, end] window for order dates.
fn order_date_window(year: Option<i32>) -> Result<(DateTime<Utc>, DateTime<Utc>), GeneratorError> {
    match year {
        Some(year) => {
            let start = Utc
                .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
                .single()
                .ok_or(GeneratorError::InvalidYear(year))?;
            let end = Utc
                .with_ymd_and_hms(year, 12, 31, 23, 59, 59)
                .single()
                .ok_or(GeneratorError::InvalidYear(year))?;
            Ok((start, end))
        }
        None => {
            let now = Utc::now();
            let start = Utc
                .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
                .single()
                .ok_or(GeneratorError::InvalidYear(now.year()))?;
            Ok((start, now))
        }
    }
}
