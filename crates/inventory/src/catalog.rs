//! Default workshop catalog used to seed a fresh inventory document.
//!
//! The component set is fixed: records are created once here and only
//! ever mutated (never added or removed) at runtime. Image paths are
//! opaque display hints for the presentation layer.

use crate::record::ComponentRecord;

const CATALOG: &[(&str, &str)] = &[
    (
        "Bow arm jig saw machine + 1 plastic box of allen keys",
        "images/bow arm jigsaw.png",
    ),
    (
        "Wood turning lathe + 1 plastic box of allen keys",
        "images/wood turning lathe.png",
    ),
    (
        "Mini metal milling machine + 1 plastic box of allen keys",
        "images/milling.png",
    ),
    (
        "Mini metal drilling machine + 1 plastic box of allen keys",
        "images/drilling.png",
    ),
    ("Mini metal sanding machine + 1 plastic box of allen keys", ""),
    (
        "Flexible shaft sanding/Grinding machine + 1 plastic box of allen keys",
        "",
    ),
    ("Mini metal lathe + 1 plastic box of allen keys", ""),
    ("Hand saw/Bow saw", "images/handsaw.png"),
    ("C-Clamp", "images/C Clamp.png"),
    ("Pistol Clamp", "images/pistol clamp.png"),
    ("Benchwise", "images/benchwise.png"),
    ("Hand filing tool set", "images/hand filing tool set.png"),
    ("Wood Carving Chisel Set", "images/chisel set.png"),
    ("6 Piece Heavy Duty Wood Carving Chisel Set", ""),
    ("Wire strippers", ""),
    ("Soldering gun", ""),
    ("Solder iron", ""),
    ("Soldering stand", ""),
    ("Flux boxes", ""),
    ("Mini minus screw drivers", ""),
    ("Star screw drivers - Red", ""),
    ("Minus screw drivers - Yellow", ""),
    ("Orange allen key", ""),
    ("Blue allen key", ""),
    ("Vernier callipers", "images/vernier callipers.png"),
];

/// The full seed catalog, in display order, all counts zero.
pub fn default_catalog() -> Vec<(String, ComponentRecord)> {
    CATALOG
        .iter()
        .map(|(name, image)| (name.to_string(), ComponentRecord::seeded(*image)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let catalog = default_catalog();
        for (i, (name, _)) in catalog.iter().enumerate() {
            assert!(
                !catalog[i + 1..].iter().any(|(other, _)| other == name),
                "duplicate catalog entry: {name}"
            );
        }
    }

    #[test]
    fn seeded_records_start_at_zero() {
        for (_, record) in default_catalog() {
            assert_eq!(record.quantity_in_hand, 0);
            assert_eq!(record.number_working, 0);
            assert_eq!(record.number_not_working, 0);
            assert_eq!(record.reason, "");
        }
    }
}
