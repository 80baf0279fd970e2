//! Person-data generators backed by the `fake` crate.

use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::Name;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use fake::Fake;
use rand::Rng;

/// Generate a full person name.
pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    Name(EN).fake_with_rng(rng)
}

/// Generate an email address.
pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    SafeEmail(EN).fake_with_rng(rng)
}

/// Generate a phone number.
pub fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    PhoneNumber(EN).fake_with_rng(rng)
}

/// Generate a single-line postal address.
pub fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let building: String = BuildingNumber(EN).fake_with_rng(rng);
    let street: String = StreetName(EN).fake_with_rng(rng);
    let city: String = CityName(EN).fake_with_rng(rng);
    let state: String = StateAbbr(EN).fake_with_rng(rng);
    let zip: String = ZipCode(EN).fake_with_rng(rng);
    format!("{building} {street}, {city}, {state} {zip}")
}
