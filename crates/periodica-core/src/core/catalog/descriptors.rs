use crate::core::models::element::Element;
use phf::{Map, phf_map};

type Lines = &'static [&'static str];

static ELEMENT_USES: Map<&'static str, Lines> = phf_map! {
    "H" => &["Fuel for rockets and spacecraft", "Production of ammonia for fertilizers", "Hydrogenation of oils in food industry", "Fuel cells for clean energy"],
    "He" => &["Filling balloons and airships", "Cooling agent in nuclear reactors", "Breathing gas for deep-sea diving", "Cryogenic applications"],
    "Li" => &["Rechargeable batteries", "Psychiatric medication", "Ceramics and glass", "Lubricating greases"],
    "Be" => &["Aerospace applications", "X-ray windows", "Nuclear reactor components", "Electronic heat sinks"],
    "B" => &["Glass and ceramics", "Detergents and bleaches", "Fire retardants", "Nuclear reactor control rods"],
    "C" => &["Steel production", "Pencil graphite", "Diamond cutting tools", "Carbon fiber composites"],
    "N" => &["Fertilizer production", "Food preservation", "Liquid nitrogen cooling", "Explosives manufacturing"],
    "O" => &["Medical oxygen therapy", "Steel production", "Water treatment", "Rocket fuel oxidizer"],
    "F" => &["Toothpaste and dental care", "Refrigerants", "Teflon production", "Uranium enrichment"],
    "Ne" => &["Neon signs and lighting", "Laser technology", "Cryogenic refrigeration", "High-voltage indicators"],
    "Na" => &["Table salt production", "Soap manufacturing", "Street lighting", "Chemical synthesis"],
    "Mg" => &["Lightweight alloys", "Fireworks and flares", "Medical antacids", "Automotive parts"],
    "Al" => &["Aircraft construction", "Food packaging", "Construction materials", "Electrical wiring"],
    "Si" => &["Computer chips and electronics", "Solar panels", "Glass production", "Silicone polymers"],
    "P" => &["Fertilizers", "Detergents", "Matches and fireworks", "Food additives"],
    "S" => &["Sulfuric acid production", "Rubber vulcanization", "Gunpowder", "Pharmaceutical drugs"],
    "Cl" => &["Water disinfection", "PVC plastic production", "Bleaching agents", "Swimming pool treatment"],
    "Ar" => &["Welding shield gas", "Light bulb filling", "Wine preservation", "Plasma displays"],
    "K" => &["Fertilizers", "Soap production", "Glass manufacturing", "Medical IV fluids"],
    "Ca" => &["Cement and concrete", "Bone and teeth health", "Steel production", "Paper manufacturing"],
    "Fe" => &["Steel and iron production", "Construction materials", "Automotive industry", "Medical supplements"],
    "Cu" => &["Electrical wiring", "Plumbing pipes", "Coins and jewelry", "Heat exchangers"],
    "Zn" => &["Galvanizing steel", "Brass production", "Dietary supplements", "Sunscreen"],
    "Ag" => &["Photography", "Jewelry and coins", "Electrical contacts", "Antimicrobial applications"],
    "Au" => &["Jewelry and decorative items", "Electronic components", "Dental work", "Investment commodity"],
    "Pt" => &["Catalytic converters", "Jewelry", "Laboratory equipment", "Cancer treatment drugs"],
};

static ELEMENT_FACTS: Map<&'static str, Lines> = phf_map! {
    "H" => &["Most abundant element in the universe", "Lightest element on the periodic table", "Burns with an invisible flame", "Can exist as three isotopes: protium, deuterium, and tritium"],
    "He" => &["Second most abundant element in the universe", "Only element discovered in space before Earth", "Cannot be solidified at normal pressure", "Makes your voice sound funny when inhaled"],
    "Li" => &["Lightest metal", "Can cut with a knife", "Floats on water", "Named after the Greek word for stone"],
    "C" => &["Forms more compounds than any other element", "Diamond is the hardest natural substance", "Graphite conducts electricity", "Essential for all known life"],
    "O" => &["Most abundant element in Earth's crust", "Discovered independently by three scientists", "Paramagnetic (attracted to magnets)", "Makes up about 21% of air"],
    "Fe" => &["Most abundant element on Earth by mass", "Core of the Earth is mostly iron", "Essential for blood hemoglobin", "Can be magnetized"],
    "Au" => &["Does not tarnish or corrode", "More malleable than any other metal", "Conducts electricity very well", "Symbol comes from Latin \"aurum\""],
    "Pt" => &["Rarer than gold", "Does not tarnish", "Used in the standard meter definition", "Discovered in South America"],
};

static ELEMENT_SAFETY: Map<&'static str, &'static str> = phf_map! {
    "H" => "Highly flammable gas. Can form explosive mixtures with air. Store in well-ventilated areas away from ignition sources.",
    "He" => "Generally safe, but can cause asphyxiation in enclosed spaces. Non-toxic and non-flammable.",
    "Li" => "Highly reactive with water, producing flammable hydrogen gas. Can cause burns. Handle with dry hands and store under oil.",
    "Be" => "Highly toxic. Beryllium dust can cause lung disease. Requires special handling procedures and protective equipment.",
    "F" => "Extremely toxic and corrosive. Can cause severe burns. Handle only with proper protective equipment in well-ventilated areas.",
    "Cl" => "Toxic gas that can cause respiratory damage. Use in well-ventilated areas and avoid inhalation.",
    "Na" => "Highly reactive with water, producing heat and flammable hydrogen. Can cause burns. Store under oil.",
    "K" => "Even more reactive than sodium with water. Can ignite spontaneously in air. Handle with extreme caution.",
    "Fe" => "Generally safe in metallic form. Iron dust can be flammable. Rust can cause tetanus if it enters wounds.",
    "Cu" => "Generally safe to handle. Copper compounds can be toxic. Avoid ingestion and prolonged skin contact.",
    "Pb" => "Highly toxic heavy metal. Can cause neurological damage. Avoid inhalation of dust and wash hands after handling.",
    "Hg" => "Extremely toxic heavy metal. Mercury vapor is particularly dangerous. Requires special disposal procedures.",
    "U" => "Radioactive and chemically toxic. Requires special licensing and handling procedures. Can cause radiation sickness.",
    "Pu" => "Extremely radioactive and toxic. One of the most dangerous substances known. Requires maximum security handling.",
};

const GENERIC_SAFETY: &str = "Handle with standard laboratory safety procedures. Wear appropriate protective equipment and ensure good ventilation. Consult safety data sheets for specific handling instructions.";

/// Descriptive text for one element, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub uses: Vec<String>,
    pub facts: Vec<String>,
    pub safety: String,
}

/// Static per-symbol uses, facts and safety notes.
///
/// Symbols without a curated entry get text generated from the element's own
/// fields (category, atomic mass, period, phase) and a generic safety note.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorTable {
    uses: &'static Map<&'static str, Lines>,
    facts: &'static Map<&'static str, Lines>,
    safety: &'static Map<&'static str, &'static str>,
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self {
            uses: &ELEMENT_USES,
            facts: &ELEMENT_FACTS,
            safety: &ELEMENT_SAFETY,
        }
    }
}

impl DescriptorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uses(&self, element: &Element) -> Vec<String> {
        match self.uses.get(element.symbol.as_str()) {
            Some(lines) => to_owned(lines),
            None => vec![
                format!("Used in {} applications", element.category_label),
                "Industrial processes".to_string(),
                "Research and development".to_string(),
                "Specialized chemical reactions".to_string(),
            ],
        }
    }

    pub fn facts(&self, element: &Element) -> Vec<String> {
        match self.facts.get(element.symbol.as_str()) {
            Some(lines) => to_owned(lines),
            None => vec![
                format!("{} belongs to the {} group", element.name, element.category_label),
                format!("Has an atomic mass of {} u", element.atomic_mass),
                format!("Located in period {} of the periodic table", element.period),
                format!(
                    "Exists in {} phase at room temperature",
                    element.phase.label().to_lowercase()
                ),
            ],
        }
    }

    pub fn safety(&self, element: &Element) -> String {
        self.safety
            .get(element.symbol.as_str())
            .copied()
            .unwrap_or(GENERIC_SAFETY)
            .to_string()
    }

    /// Whether `symbol` has curated uses (the rest of its text may still be generated).
    pub fn has_curated_uses(&self, symbol: &str) -> bool {
        self.uses.contains_key(symbol)
    }

    pub fn describe(&self, element: &Element) -> ElementDescriptor {
        ElementDescriptor {
            uses: self.uses(element),
            facts: self.facts(element),
            safety: self.safety(element),
        }
    }
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
