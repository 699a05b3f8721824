//! The optics-shop locator.
//!
//! No directory service backs this: listings are synthesized on every
//! search by splicing the typed "City, State" string into four fixed
//! templates. Results are ephemeral and deterministic for a given input;
//! nothing is persisted.

use framefit_core::OpticsListing;

/// Fallback city when the location string has no city part.
const DEFAULT_CITY: &str = "São Paulo";
/// Fallback state when the location string has no state part.
const DEFAULT_STATE: &str = "SP";

/// Synthesize the four nearby listings for a free-text location.
///
/// The location is split on the first comma into city and state; missing
/// parts fall back to São Paulo / SP. Distances and ratings are fixed
/// decoration.
#[must_use]
pub fn find_nearby(location: &str) -> Vec<OpticsListing> {
    let (city, state) = split_location(location);

    vec![
        listing(
            "1",
            format!("Ótica Vision Premium {city}"),
            format!("Av. Principal, 1578 - Centro, {city} - {state}"),
            "(11) 3456-7890",
            "Mon-Fri: 9am-7pm | Sat: 9am-2pm",
            &["Prescription Lenses", "Sunglasses", "Contact Lenses"],
            "1.2 km",
            4.8,
            &city,
            &state,
        ),
        listing(
            "2",
            format!("Ótica Moderna {city}"),
            format!("Rua Comercial, 2690 - Centro, {city} - {state}"),
            "(11) 3234-5678",
            "Mon-Fri: 10am-8pm | Sat: 10am-6pm",
            &["Designer Frames", "Eye Exams", "Adjustments"],
            "2.5 km",
            4.6,
            &city,
            &state,
        ),
        listing(
            "3",
            format!("Ótica Estilo & Visão {city}"),
            format!("Av. Shopping, 379 - Bairro Nobre, {city} - {state}"),
            "(11) 3567-8901",
            "Mon-Sat: 10am-7pm",
            &["Premium Brands", "Style Consulting", "Virtual Try-On"],
            "3.8 km",
            4.9,
            &city,
            &state,
        ),
        listing(
            "4",
            format!("Ótica Popular {city}"),
            format!("Av. Central, 2344 - Centro, {city} - {state}"),
            "(11) 3890-1234",
            "Mon-Fri: 9am-6pm | Sat: 9am-1pm",
            &["Affordable Prices", "Multifocal Lenses", "Kids' Frames"],
            "4.2 km",
            4.5,
            &city,
            &state,
        ),
    ]
}

/// Split "City, State" on the first comma, trimming both parts.
fn split_location(location: &str) -> (String, String) {
    let (city, state) = match location.split_once(',') {
        Some((c, s)) => (c.trim(), s.trim()),
        None => (location.trim(), ""),
    };

    let city = if city.is_empty() { DEFAULT_CITY } else { city };
    let state = if state.is_empty() { DEFAULT_STATE } else { state };
    (city.to_owned(), state.to_owned())
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: String,
    address: String,
    phone: &str,
    hours: &str,
    specialties: &[&str],
    distance: &str,
    rating: f32,
    city: &str,
    state: &str,
) -> OpticsListing {
    OpticsListing {
        id: id.to_owned(),
        name,
        address,
        phone: phone.to_owned(),
        hours: hours.to_owned(),
        specialties: specialties.iter().map(|&s| s.to_owned()).collect(),
        distance: distance.to_owned(),
        rating,
        city: city.to_owned(),
        state: state.to_owned(),
    }
}
