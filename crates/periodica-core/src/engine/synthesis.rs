use super::error::MatchError;
use crate::core::catalog::elements::ElementCatalog;
use crate::core::models::composition::Composition;
use crate::core::models::compound::{Compound, CompoundProperties};
use crate::core::models::element::{Category, Element};
use crate::core::utils::naming;

#[derive(Debug, Clone, Copy)]
struct Constituent<'a> {
    element: &'a Element,
    count: u32,
}

impl Constituent<'_> {
    fn formula_part(&self) -> String {
        if self.count == 1 {
            self.element.symbol.clone()
        } else {
            format!("{}{}", self.element.symbol, self.count)
        }
    }

    fn is_anion_like(&self) -> bool {
        self.element.category.is_nonmetal() || self.element.category == Category::NobleGas
    }
}

/// Builds a plausible description for a composition that matches no catalog
/// compound.
///
/// The formula, name and class are derived from the elements involved; the
/// molecular mass is the exact sum of atomic masses. Physical properties that
/// cannot be derived are filled with generic text.
///
/// # Errors
///
/// Returns `MatchError::EmptySelection` for an empty composition and
/// `MatchError::UnknownElement` for a symbol missing from `elements`.
pub fn synthesize(
    composition: &Composition,
    elements: &ElementCatalog,
) -> Result<Compound, MatchError> {
    let constituents = composition
        .iter()
        .map(|(symbol, count)| {
            elements
                .get(symbol)
                .map(|element| Constituent { element, count })
                .ok_or_else(|| MatchError::UnknownElement {
                    symbol: symbol.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (ordered, name, class) = match constituents.as_slice() {
        [] => return Err(MatchError::EmptySelection),
        [single] => single_element(*single),
        [a, b] => binary(*a, *b),
        _ => complex(constituents.clone()),
    };

    let formula: String = ordered.iter().map(Constituent::formula_part).collect();
    let molecular_mass: f64 = ordered
        .iter()
        .map(|c| c.element.atomic_mass * f64::from(c.count))
        .sum();
    let formation_reaction = format!(
        "{} → {}",
        ordered
            .iter()
            .map(|c| c.element.symbol.as_str())
            .collect::<Vec<_>>()
            .join(" + "),
        formula
    );

    Ok(Compound {
        properties: CompoundProperties {
            state: Some(state_for(&ordered, class).to_string()),
            color: Some("Unknown".to_string()),
            density: None,
            melting_point: None,
            boiling_point: None,
            bond_type: Some(bond_type_for(&ordered).to_string()),
            solubility: Some("Varies".to_string()),
            reactivity: Some("Varies with conditions".to_string()),
            safety: Some("Handle with appropriate safety measures".to_string()),
            discovery: Some("Synthetic or naturally occurring".to_string()),
            formation_reaction: Some(formation_reaction),
        },
        uses: uses_for(&ordered, class),
        facts: facts_for(&ordered, class),
        name,
        formula,
        composition: composition.clone(),
        molecular_mass,
        category: class.to_string(),
    })
}

fn single_element(c: Constituent<'_>) -> (Vec<Constituent<'_>>, String, &'static str) {
    let (name, class) = if c.count == 1 {
        (c.element.name.clone(), "Element")
    } else if naming::is_diatomic_former(&c.element.symbol) {
        (format!("{} Gas", c.element.name), "Diatomic Gas")
    } else {
        (format!("{} Cluster", c.element.name), "Polyatomic")
    };
    (vec![c], name, class)
}

/// Metal before nonmetal when the pair is one of each, alphabetical otherwise.
fn binary<'a>(
    a: Constituent<'a>,
    b: Constituent<'a>,
) -> (Vec<Constituent<'a>>, String, &'static str) {
    let (cation, anion) = if b.element.category.is_metal() && a.is_anion_like() {
        (b, a)
    } else {
        (a, b)
    };

    let name = naming::binary_name(
        &cation.element.name,
        &anion.element.symbol,
        &anion.element.name,
        cation.count,
        anion.count,
    );
    let class = naming::binary_class(&anion.element.symbol);
    (vec![cation, anion], name, class)
}

fn complex(mut constituents: Vec<Constituent<'_>>) -> (Vec<Constituent<'_>>, String, &'static str) {
    constituents.sort_by(|x, y| {
        y.count
            .cmp(&x.count)
            .then_with(|| x.element.symbol.cmp(&y.element.symbol))
    });

    let name = format!(
        "{} Compound",
        constituents
            .iter()
            .map(|c| c.element.name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let has = |symbol: &str| constituents.iter().any(|c| c.element.symbol == symbol);
    let class = if has("O") {
        if constituents.len() == 3 {
            "Ternary Oxide"
        } else {
            "Complex Oxide"
        }
    } else if constituents.iter().any(|c| naming::is_halogen(&c.element.symbol)) {
        "Complex Halide"
    } else {
        "Complex Compound"
    };

    (constituents, name, class)
}

fn bond_type_for(constituents: &[Constituent<'_>]) -> &'static str {
    let has_metal = constituents.iter().any(|c| c.element.category.is_metal());
    let has_nonmetal = constituents.iter().any(|c| c.element.category.is_nonmetal());

    if has_metal && has_nonmetal {
        "Ionic"
    } else if constituents.len() == 1 && has_metal {
        "Metallic"
    } else {
        "Covalent"
    }
}

fn state_for(constituents: &[Constituent<'_>], class: &str) -> &'static str {
    if class == "Diatomic Gas" {
        return "Gas";
    }
    let light = constituents
        .iter()
        .any(|c| naming::is_light_gas_former(&c.element.symbol));
    if light && constituents.len() <= 2 {
        "Gas"
    } else {
        "Solid"
    }
}

fn push_unique(list: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !list.iter().any(|existing| existing == item) {
            list.push(item.to_string());
        }
    }
}

fn uses_for(constituents: &[Constituent<'_>], class: &str) -> Vec<String> {
    let mut uses = Vec::new();
    let has = |symbol: &str| constituents.iter().any(|c| c.element.symbol == symbol);
    let has_category =
        |category: Category| constituents.iter().any(|c| c.element.category == category);

    match class {
        "Oxide" => push_unique(
            &mut uses,
            &["Refractory materials", "Ceramic applications", "Pigments"],
        ),
        "Halide" => push_unique(&mut uses, &["Chemical synthesis", "Disinfectant", "Photography"]),
        "Hydride" => push_unique(
            &mut uses,
            &["Hydrogen storage", "Reducing agent", "Battery materials"],
        ),
        "Carbide" => push_unique(
            &mut uses,
            &["Cutting tools", "Abrasives", "High-temperature applications"],
        ),
        "Nitride" => push_unique(&mut uses, &["Hard coatings", "Semiconductors", "Cutting tools"]),
        _ => {}
    }

    if has("O") {
        push_unique(
            &mut uses,
            &["Oxidizing agent", "Ceramic applications", "Refractory materials"],
        );
    }
    if ["F", "Cl", "Br", "I"].iter().any(|&s| has(s)) {
        push_unique(
            &mut uses,
            &["Chemical synthesis", "Disinfectant", "Pharmaceutical intermediate"],
        );
    }
    if has("H") {
        push_unique(&mut uses, &["Reducing agent", "Hydrogen storage", "Chemical processing"]);
    }
    if has("C") {
        push_unique(&mut uses, &["High-temperature applications", "Cutting tools", "Abrasives"]);
    }
    if has("N") {
        push_unique(&mut uses, &["Hard coatings", "Cutting tools", "Electronic applications"]);
    }

    if has_category(Category::TransitionMetal) {
        push_unique(&mut uses, &["Catalysis", "Magnetic materials", "Electronic components"]);
    }
    if has_category(Category::Lanthanide) {
        push_unique(&mut uses, &["Phosphors", "Laser materials", "Magnetic applications"]);
    }
    if has_category(Category::Actinide) {
        push_unique(
            &mut uses,
            &["Nuclear applications", "Research purposes", "Specialized materials"],
        );
    }

    if uses.is_empty() {
        push_unique(
            &mut uses,
            &["Research applications", "Chemical synthesis", "Industrial processes"],
        );
    }
    uses
}

fn facts_for(constituents: &[Constituent<'_>], class: &str) -> Vec<String> {
    let mut facts = Vec::new();
    let any = |pred: &dyn Fn(&Element) -> bool| constituents.iter().any(|c| pred(c.element));

    match class {
        "Oxide" => facts.push("Metal oxide with potential ceramic applications".to_string()),
        "Halide" => facts.push("Halide compound with ionic bonding".to_string()),
        "Diatomic Gas" => facts.push("Diatomic molecule found in gaseous state".to_string()),
        _ => {}
    }

    if any(&|e| e.category == Category::Lanthanide) {
        facts.push("Contains rare earth elements".to_string());
    }
    if any(&|e| e.category == Category::Actinide) {
        facts.push("Contains radioactive actinide elements".to_string());
    }
    if any(&Element::is_super_heavy) {
        facts.push("Contains super-heavy synthetic elements".to_string());
    }
    if constituents.len() > 3 {
        facts.push("Complex multi-element compound".to_string());
    }
    if any(&|e| e.atomic_mass > 200.0) {
        facts.push("Contains heavy elements".to_string());
    }

    if facts.is_empty() {
        let symbols: Vec<&str> = constituents
            .iter()
            .map(|c| c.element.symbol.as_str())
            .collect();
        facts.push(format!("Compound containing {}", symbols.join(", ")));
    }
    facts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::BUNDLED_ELEMENTS_CSV;

    fn elements() -> ElementCatalog {
        ElementCatalog::from_csv_str(BUNDLED_ELEMENTS_CSV, "bundled").unwrap()
    }

    fn synth(formula: &str) -> Compound {
        let composition: Composition = formula.parse().unwrap();
        synthesize(&composition, &elements()).unwrap()
    }

    #[test]
    fn single_atom_is_the_element_itself() {
        let iron = synth("Fe");
        assert_eq!(iron.formula, "Fe");
        assert_eq!(iron.name, "Iron");
        assert_eq!(iron.category, "Element");
        assert_eq!(iron.properties.bond_type.as_deref(), Some("Metallic"));
        assert_eq!(iron.properties.state.as_deref(), Some("Solid"));
    }

    #[test]
    fn repeated_diatomic_former_is_a_gas() {
        let chlorine = synth("Cl2");
        assert_eq!(chlorine.formula, "Cl2");
        assert_eq!(chlorine.name, "Chlorine Gas");
        assert_eq!(chlorine.category, "Diatomic Gas");
        assert_eq!(chlorine.properties.state.as_deref(), Some("Gas"));
        assert_eq!(chlorine.properties.bond_type.as_deref(), Some("Covalent"));
        assert!(chlorine.facts.contains(&"Diatomic molecule found in gaseous state".to_string()));
    }

    #[test]
    fn repeated_other_element_is_a_cluster() {
        let sulfur = synth("S8");
        assert_eq!(sulfur.name, "Sulfur Cluster");
        assert_eq!(sulfur.category, "Polyatomic");
    }

    #[test]
    fn binary_puts_metal_first_and_names_systematically() {
        let compound = synth("Cl2Ca");
        assert_eq!(compound.formula, "CaCl2");
        assert_eq!(compound.name, "Calcium Dichloride");
        assert_eq!(compound.category, "Halide");
        assert_eq!(compound.properties.bond_type.as_deref(), Some("Ionic"));
        assert_eq!(compound.properties.formation_reaction.as_deref(), Some("Ca + Cl → CaCl2"));
    }

    #[test]
    fn binary_with_noble_gas_orders_metal_first() {
        let compound = synth("HeAu");
        assert_eq!(compound.formula, "AuHe");
        assert_eq!(compound.name, "Gold Helium");
        assert_eq!(compound.category, "Binary Compound");
        assert_eq!(compound.properties.bond_type.as_deref(), Some("Covalent"));
        assert_eq!(compound.properties.state.as_deref(), Some("Solid"));
        assert_eq!(compound.facts, vec!["Compound containing Au, He"]);
    }

    #[test]
    fn hypothetical_mass_is_exact_sum_of_atomic_masses() {
        let elements = elements();
        let composition: Composition = "HeAu".parse().unwrap();
        let compound = synthesize(&composition, &elements).unwrap();
        let expected =
            elements.get("He").unwrap().atomic_mass + elements.get("Au").unwrap().atomic_mass;
        assert_eq!(compound.molecular_mass, expected);
        assert_eq!(compound.composition, composition);
    }

    #[test]
    fn complex_compounds_order_by_count_then_symbol() {
        let compound = synth("NaHCO3");
        assert_eq!(compound.formula, "O3CHNa");
        assert_eq!(compound.name, "Oxygen Carbon Hydrogen Sodium Compound");
        assert_eq!(compound.category, "Complex Oxide");
        assert!(compound.facts.contains(&"Complex multi-element compound".to_string()));
    }

    #[test]
    fn ternary_classes() {
        assert_eq!(synth("KNO3").category, "Ternary Oxide");
        assert_eq!(synth("NaKCl2").category, "Complex Halide");
        assert_eq!(synth("LiBeB").category, "Complex Compound");
    }

    #[test]
    fn uses_are_deduplicated_and_keep_first_occurrence_order() {
        let oxide = synth("MgO");
        assert_eq!(&oxide.uses[..3], ["Refractory materials", "Ceramic applications", "Pigments"]);
        assert_eq!(oxide.uses[3], "Oxidizing agent");
        let mut sorted = oxide.uses.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), oxide.uses.len());
    }

    #[test]
    fn facts_fall_back_to_listing_the_symbols() {
        let compound = synth("LiBe");
        assert_eq!(compound.facts, vec!["Compound containing Be, Li"]);
        assert_eq!(
            compound.uses,
            vec![
                "Research applications",
                "Chemical synthesis",
                "Industrial processes"
            ]
        );
    }

    #[test]
    fn rare_and_super_heavy_elements_are_noted() {
        let compound = synth("CeOg");
        assert!(compound.facts.contains(&"Contains rare earth elements".to_string()));
        assert!(compound.facts.contains(&"Contains super-heavy synthetic elements".to_string()));
        assert!(compound.facts.contains(&"Contains heavy elements".to_string()));
    }

    #[test]
    fn generic_properties_are_filled_in() {
        let compound = synth("HeAu");
        assert_eq!(compound.properties.color.as_deref(), Some("Unknown"));
        assert_eq!(compound.properties.solubility.as_deref(), Some("Varies"));
        assert!(compound.properties.density.is_none());
        assert!(compound.properties.melting_point.is_none());
    }

    #[test]
    fn unknown_symbols_and_empty_compositions_are_errors() {
        let elements = elements();
        let unknown: Composition = "XxO".parse().unwrap();
        assert_eq!(
            synthesize(&unknown, &elements),
            Err(MatchError::UnknownElement { symbol: "Xx".to_string() })
        );
        assert_eq!(
            synthesize(&Composition::new(), &elements),
            Err(MatchError::EmptySelection)
        );
    }
}
