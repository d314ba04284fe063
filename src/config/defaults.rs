//! Built-in configuration values, used for missing files and missing fields.

use super::{AbbreviationRule, PrefixRewrite};

pub const MIN_YEAR: u16 = 2020;
pub const MAX_YEAR: u16 = 2100;

pub fn target_rooms() -> Vec<u32> {
    vec![225, 227, 229, 242, 325, 327, 330, 429]
}

pub fn year() -> u16 {
    2025
}

pub fn chart_title() -> String {
    "Room Use Chart for the Biology Laboratories".to_string()
}

pub fn room_label_prefix() -> String {
    "ST".to_string()
}

pub fn closed_marker() -> String {
    "CLOSED".to_string()
}

pub fn course_prefix_rewrite() -> Option<PrefixRewrite> {
    Some(PrefixRewrite {
        from: "BIOL".to_string(),
        to: "BIO".to_string(),
    })
}

/// Ordered title table. Longer titles come before the shorter ones they
/// contain ("Medical Microbiology" before "Microbiology"), and the two
/// deletions run last.
pub fn abbreviations() -> Vec<AbbreviationRule> {
    [
        ("Anatomy & Physiology", "A & P"),
        ("Bioenergetics and Systems", "Bioenergetics"),
        ("Genomes and Evolution", "Genome Evol"),
        ("Medical Microbiology", "Med Micro"),
        ("Earth/Life Sci for Educators", "Life Sci Ed"),
        ("Biostatistics", "Biostats"),
        ("Biology Capstone Seminar", "Capstone"),
        ("Insect Biology", "Insect Bio"),
        ("Science in the Public Domain", "SCI Pub Dom"),
        ("Ecological Community:San Diego", "Ecol Comm"),
        ("Research Methods", "Res Meth"),
        ("Cell Physiology", "Cell Phys"),
        ("Vertebrate Physiology", "Vert Phys"),
        ("Microbiology", "Micro"),
        ("Research Project", "Res Proj"),
        ("Techniques: Molecular Biology", "Molec Tech"),
        ("Comp. Anat. of Vertebrates", "Comp An Vert"),
        ("Invertebrate Zoology", "Invert Zoo"),
        ("Peoples, Plagues and Microbes", "Ppl Plag Micro"),
        ("Ecol Evol Infectious Disease", "EEID"),
        ("Immunology", "Immuno"),
        ("Laboratory", ""),
        ("Lab", ""),
    ]
    .into_iter()
    .map(|(p, r)| AbbreviationRule::new(p, r))
    .collect()
}
