use phf::{Map, Set, phf_map, phf_set};

static DIATOMIC_FORMERS: Set<&'static str> = phf_set! {
    "H", "N", "O", "F", "Cl", "Br", "I",
};

static LIGHT_GAS_FORMERS: Set<&'static str> = phf_set! {
    "H", "N", "O", "F", "Cl",
};

static HALIDE_NAMES: Map<&'static str, &'static str> = phf_map! {
    "F" => "Fluoride",
    "Cl" => "Chloride",
    "Br" => "Bromide",
    "I" => "Iodide",
    "At" => "Astatide",
};

static ANION_NAMES: Map<&'static str, &'static str> = phf_map! {
    "S" => "Sulfide",
    "N" => "Nitride",
    "C" => "Carbide",
    "H" => "Hydride",
    "P" => "Phosphide",
};

static BINARY_CLASSES: Map<&'static str, &'static str> = phf_map! {
    "O" => "Oxide",
    "F" => "Halide", "Cl" => "Halide", "Br" => "Halide", "I" => "Halide", "At" => "Halide",
    "S" => "Sulfide",
    "N" => "Nitride",
    "C" => "Carbide",
    "H" => "Hydride",
    "P" => "Phosphide",
};

/// Elements that exist as diatomic molecules in their standard state.
pub fn is_diatomic_former(symbol: &str) -> bool {
    DIATOMIC_FORMERS.contains(symbol)
}

/// Light elements whose small compounds are treated as gases.
pub fn is_light_gas_former(symbol: &str) -> bool {
    LIGHT_GAS_FORMERS.contains(symbol)
}

pub fn is_halogen(symbol: &str) -> bool {
    HALIDE_NAMES.contains_key(symbol)
}

/// Compound class of a binary compound, decided by its second (anionic) element.
pub fn binary_class(anion_symbol: &str) -> &'static str {
    BINARY_CLASSES
        .get(anion_symbol)
        .copied()
        .unwrap_or("Binary Compound")
}

/// Systematic name of a binary compound `cation_count × cation + anion_count × anion`.
///
/// Only the anion drives the suffix: oxides gain "Di"/"Tri" prefixes for the
/// common 1:2 and 2:3 ratios, halides take a multiplier prefix up to four,
/// and anything without a known anion name is simply "<cation> <anion>".
pub fn binary_name(
    cation_name: &str,
    anion_symbol: &str,
    anion_name: &str,
    cation_count: u32,
    anion_count: u32,
) -> String {
    if anion_symbol == "O" {
        return match (cation_count, anion_count) {
            (1, 2) => format!("{} Dioxide", cation_name),
            (2, 3) => format!("{} Trioxide", cation_name),
            _ => format!("{} Oxide", cation_name),
        };
    }

    if let Some(halide) = HALIDE_NAMES.get(anion_symbol) {
        let prefix = match anion_count {
            2 => Some("Di"),
            3 => Some("Tri"),
            4 => Some("Tetra"),
            _ => None,
        };
        return match prefix {
            Some(prefix) => format!("{} {}{}", cation_name, prefix, halide.to_lowercase()),
            None => format!("{} {}", cation_name, halide),
        };
    }

    match ANION_NAMES.get(anion_symbol) {
        Some(suffix) => format!("{} {}", cation_name, suffix),
        None => format!("{} {}", cation_name, anion_name),
    }
}

/// Multiplier word for a ratio match ("double", "triple", ...).
pub fn multiplier_word(k: u32) -> String {
    match k {
        2 => "double".to_string(),
        3 => "triple".to_string(),
        4 => "quadruple".to_string(),
        n => format!("{} times", n),
    }
}
