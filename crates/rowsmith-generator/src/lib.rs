//! Synthetic record generator for the rowsmith toolkit.
//!
//! This crate provides [`RecordGenerator`], which produces ordered
//! sequences of flat [`rowsmith_core::Record`]s for five entity shapes:
//!
//! - `users` - id, name, email, phone, address, created_at (include-list
//!   selectable)
//! - `orders` - id, user_id, amount, status, order_date, product_name,
//!   quantity
//! - `payment_transactions` - id, order_id, amount, payment_method,
//!   status, transaction_date, gateway, failure_reason
//! - `products` - id, name, description, price, category, sku,
//!   stock_quantity, created_at
//! - custom - one field per entry of a caller-supplied
//!   [`rowsmith_core::CustomSchema`]
//!
//! # Example
//!
//! ```rust
//! use rowsmith_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::with_seed(42);
//! let users = generator.users(3, None);
//!
//! assert_eq!(users.len(), 3);
//! assert_eq!(users[0].get("id"), Some(&rowsmith_core::Value::Int(1)));
//! ```
//!
//! The generator owns an unseeded `StdRng` by default; `with_seed` pins
//! the RNG for reproducible output in tests. Content is randomized, shape
//! is deterministic: every record of one call carries the same field set
//! in the same order, and `id` fields are a dense 1-based sequence.

pub mod fields;
pub mod generator;

// Re-exports for convenience
pub use generator::{
    GeneratorError, OrderOptions, PaymentOptions, RecordGenerator, UserField,
};
