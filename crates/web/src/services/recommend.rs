//! The recommendation resolver.
//!
//! Pure and total: a face-shape label maps to an ordered list from the
//! static per-shape catalog, with a universal fallback for anything the
//! lookup does not recognize. Same label in, same list out, every call.
//!
//! Lookup is a case-insensitive substring match against a fixed ordered
//! set of shape keys; the first match wins. "Heart" also answers for
//! "inverted triangular" labels and must therefore be checked before
//! "triangular".

use framefit_core::{FaceShape, Price, RecommendationItem};

const IMG_AVIATOR: &str =
    "https://images.unsplash.com/photo-1511499767150-a48a237f0083?w=400&h=400&fit=crop";
const IMG_WAYFARER: &str =
    "https://images.unsplash.com/photo-1574258495973-f010dfbb5371?w=400&h=400&fit=crop";
const IMG_ROUND: &str =
    "https://images.unsplash.com/photo-1577803645773-f96470509666?w=400&h=400&fit=crop";

/// Resolve a face-shape label to its ordered recommendation list.
///
/// Every returned list is non-empty and has exactly one free item - by
/// convention the first; the remainder are premium-locked.
#[must_use]
pub fn resolve(label: &str) -> Vec<RecommendationItem> {
    let lower = label.to_lowercase();

    if lower.contains("oval") {
        return oval_catalog();
    }
    if lower.contains("round") {
        return round_catalog();
    }
    if lower.contains("square") {
        return square_catalog();
    }
    // "Heart" must answer for "inverted triangular" before the plain
    // triangular key gets a chance to match.
    if lower.contains("heart") || lower.contains("inverted") {
        return heart_catalog();
    }
    if lower.contains("diamond") {
        return diamond_catalog();
    }
    if lower.contains("triangular") {
        return triangular_catalog();
    }
    if lower.contains("rectangular") || lower.contains("oblong") || lower.contains("elongated") {
        return rectangular_catalog();
    }

    universal_catalog()
}

/// Resolve for a classified shape.
#[must_use]
pub fn resolve_shape(shape: FaceShape) -> Vec<RecommendationItem> {
    resolve(shape.as_str())
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    brand: &str,
    price_reais: i64,
    image_ref: &str,
    description: &str,
    premium_locked: bool,
    recommended_for: &[&str],
) -> RecommendationItem {
    RecommendationItem {
        id: id.to_owned(),
        name: name.to_owned(),
        brand: brand.to_owned(),
        price: Price::brl(price_reais),
        image_ref: image_ref.to_owned(),
        description: description.to_owned(),
        premium_locked,
        recommended_for: recommended_for.iter().map(|&s| s.to_owned()).collect(),
    }
}

/// Oval: balanced proportions, suits almost every style.
fn oval_catalog() -> Vec<RecommendationItem> {
    vec![
        item(
            "oval-classic-aviator",
            "Classic Aviator",
            "Ray-Ban",
            450,
            IMG_AVIATOR,
            "Classic metal aviator frame. Ideal for oval faces, it keeps the natural balance of your proportions.",
            false,
            &["Oval"],
        ),
        item(
            "oval-wayfarer-bold",
            "Wayfarer Bold",
            "Oakley",
            680,
            IMG_WAYFARER,
            "Square acetate frame. Perfect for oval faces, it adds definition without breaking the harmony.",
            true,
            &["Oval"],
        ),
        item(
            "oval-round-vintage",
            "Round Vintage",
            "Prada",
            890,
            IMG_ROUND,
            "Vintage round frame. Complements the softness of an oval face with sophisticated style.",
            true,
            &["Oval"],
        ),
    ]
}

/// Round: needs angular frames to lengthen the face.
fn round_catalog() -> Vec<RecommendationItem> {
    vec![
        item(
            "round-angular-rectangle",
            "Angular Rectangle",
            "Ray-Ban",
            520,
            IMG_AVIATOR,
            "Rectangular frame with defined angles. Lengthens a round face and adds structure.",
            false,
            &["Round"],
        ),
        item(
            "round-cat-eye-sharp",
            "Cat Eye Sharp",
            "Gucci",
            780,
            IMG_WAYFARER,
            "Cat eye with accentuated tips. Creates vertical lines that lengthen round faces.",
            true,
            &["Round"],
        ),
        item(
            "round-geometric-bold",
            "Geometric Bold",
            "Prada",
            850,
            IMG_ROUND,
            "Bold geometric frame. Adds angles and definition to balance the softness of the face.",
            true,
            &["Round"],
        ),
    ]
}

/// Square: needs rounded frames to soften strong angles.
fn square_catalog() -> Vec<RecommendationItem> {
    vec![
        item(
            "square-round-soft",
            "Round Soft",
            "Ray-Ban",
            480,
            IMG_AVIATOR,
            "Soft round frame. Smooths the pronounced angles of a square face.",
            false,
            &["Square"],
        ),
        item(
            "square-oval-delicate",
            "Oval Delicate",
            "Oakley",
            650,
            IMG_WAYFARER,
            "Delicate oval frame. Balances a strong jawline with gentle curves.",
            true,
            &["Square"],
        ),
        item(
            "square-aviator-curved",
            "Aviator Curved",
            "Tom Ford",
            920,
            IMG_ROUND,
            "Aviator with accentuated curves. Contrasts with the straight angles of a square face.",
            true,
            &["Square"],
        ),
    ]
}

/// Heart: balance a wide forehead against a narrow chin.
fn heart_catalog() -> Vec<RecommendationItem> {
    vec![
        item(
            "heart-bottom-heavy",
            "Bottom Heavy Frame",
            "Ray-Ban",
            510,
            IMG_AVIATOR,
            "Frame with a wider base. Balances a broad forehead with a delicate chin.",
            false,
            &["Heart"],
        ),
        item(
            "heart-cat-eye-classic",
            "Cat Eye Classic",
            "Prada",
            790,
            IMG_WAYFARER,
            "Classic cat eye. Adds width to the lower face and harmonizes the proportions.",
            true,
            &["Heart"],
        ),
        item(
            "heart-rimless-light",
            "Rimless Light",
            "Silhouette",
            880,
            IMG_ROUND,
            "Light rimless frame. Adds no visual weight to an already prominent forehead.",
            true,
            &["Heart"],
        ),
    ]
}

/// Diamond: soften prominent cheekbones.
fn diamond_catalog() -> Vec<RecommendationItem> {
    vec![
        item(
            "diamond-oval-wide",
            "Oval Wide",
            "Ray-Ban",
            490,
            IMG_AVIATOR,
            "Wide oval frame. Softens prominent cheekbones and balances the proportions.",
            false,
            &["Diamond"],
        ),
        item(
            "diamond-cat-eye-soft",
            "Cat Eye Soft",
            "Gucci",
            820,
            IMG_WAYFARER,
            "Soft cat eye. Adds width at the top and bottom, balancing the middle of the face.",
            true,
            &["Diamond"],
        ),
        item(
            "diamond-rimless-elegant",
            "Rimless Elegant",
            "Silhouette",
            950,
            IMG_ROUND,
            "Elegant rimless frame. Keeps things light without emphasizing the cheekbones.",
            true,
            &["Diamond"],
        ),
    ]
}

/// Triangular (wide base): balance a wide jaw with visual weight on top.
fn triangular_catalog() -> Vec<RecommendationItem> {
    vec![
        item(
            "triangular-top-heavy",
            "Top Heavy Frame",
            "Ray-Ban",
            530,
            IMG_AVIATOR,
            "Frame with a wider top. Balances a wide jaw with visual weight above.",
            false,
            &["Triangular"],
        ),
        item(
            "triangular-cat-eye-bold",
            "Cat Eye Bold",
            "Tom Ford",
            860,
            IMG_WAYFARER,
            "Bold cat eye. Adds width to the upper face to counter the wide base.",
            true,
            &["Triangular"],
        ),
        item(
            "triangular-browline-classic",
            "Browline Classic",
            "Ray-Ban",
            720,
            IMG_ROUND,
            "Classic browline frame. Emphasizes the upper face and balances a strong jaw.",
            true,
            &["Triangular"],
        ),
    ]
}

/// Rectangular/oblong: shorten the face visually.
fn rectangular_catalog() -> Vec<RecommendationItem> {
    vec![
        item(
            "rect-oversized-round",
            "Oversized Round",
            "Ray-Ban",
            560,
            IMG_AVIATOR,
            "Large round frame. Adds width and visually shortens an elongated face.",
            false,
            &["Rectangular", "Oblong"],
        ),
        item(
            "rect-wayfarer-large",
            "Wayfarer Large",
            "Oakley",
            690,
            IMG_WAYFARER,
            "Large wayfarer. A wide frame that breaks the verticality of the face.",
            true,
            &["Rectangular", "Oblong"],
        ),
        item(
            "rect-geometric-wide",
            "Geometric Wide",
            "Prada",
            840,
            IMG_ROUND,
            "Wide geometric frame. Adds horizontal proportion to an elongated face.",
            true,
            &["Rectangular", "Oblong"],
        ),
    ]
}

/// Fallback when no shape key matches the label.
fn universal_catalog() -> Vec<RecommendationItem> {
    vec![
        item(
            "universal-classic-aviator",
            "Classic Aviator",
            "Ray-Ban",
            450,
            IMG_AVIATOR,
            "Versatile classic frame that works well with many face shapes.",
            false,
            &["Universal"],
        ),
        item(
            "universal-modern-wayfarer",
            "Modern Wayfarer",
            "Oakley",
            680,
            IMG_WAYFARER,
            "Modern, timeless design suited to most face shapes.",
            true,
            &["Universal"],
        ),
        item(
            "universal-elegant-frame",
            "Elegant Frame",
            "Prada",
            890,
            IMG_ROUND,
            "Elegant, sophisticated frame with universal appeal.",
            true,
            &["Universal"],
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_resolver_is_pure() {
        for shape in FaceShape::ALL {
            assert_eq!(resolve_shape(shape), resolve_shape(shape));
        }
    }

    #[test]
    fn test_every_label_gets_exactly_one_free_item() {
        for shape in FaceShape::ALL {
            let list = resolve_shape(shape);
            assert!(!list.is_empty(), "{shape} list must not be empty");
            let free = list.iter().filter(|i| !i.premium_locked).count();
            assert_eq!(free, 1, "{shape} list must have exactly one free item");
            assert!(!list[0].premium_locked, "the free item is the first");
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_universal() {
        let list = resolve("unknown-xyz");
        assert_eq!(list.len(), 3);
        assert!(
            list.iter()
                .all(|i| i.recommended_for == vec!["Universal".to_owned()])
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(resolve("OVAL"), resolve("oval"));
        assert_eq!(resolve("Round"), resolve("rOuNd"));
    }

    #[test]
    fn test_inverted_triangular_resolves_as_heart() {
        assert_eq!(resolve("Inverted Triangular"), resolve("Heart"));
        assert_ne!(resolve("Inverted Triangular"), resolve("Triangular"));
    }

    #[test]
    fn test_rectangular_and_oblong_share_a_list() {
        assert_eq!(resolve("Rectangular"), resolve("Oblong"));
        assert_eq!(resolve("Rectangular"), resolve("Elongated"));
    }

    #[test]
    fn test_prices_are_positive() {
        for shape in FaceShape::ALL {
            for entry in resolve_shape(shape) {
                assert!(entry.price.amount > Decimal::ZERO);
            }
        }
    }
}
