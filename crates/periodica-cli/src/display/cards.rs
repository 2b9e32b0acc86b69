use std::io::Write;

use periodica::core::catalog::descriptors::ElementDescriptor;
use periodica::core::models::compound::Compound;
use periodica::core::models::element::Element;
use periodica::engine::matcher::MatchResult;
use periodica::engine::quiz::Question;
use periodica::workflows::mix::MixReport;

use super::tables::{INDENT, print_bullets, print_kv_table, print_paragraph};

const KELVIN_OFFSET: f64 = 273.15;

fn temperature(kelvin: Option<f64>) -> String {
    match kelvin {
        Some(k) => format!("{:.2} K ({:.2} °C)", k, k - KELVIN_OFFSET),
        None => "Unknown".to_string(),
    }
}

fn density(value: Option<f64>) -> String {
    match value {
        Some(d) => format!("{} g/cm³", d),
        None => "Unknown".to_string(),
    }
}

pub fn print_element(out: &mut impl Write, element: &Element, descriptor: &ElementDescriptor) {
    let rows = vec![
        ("Symbol", element.symbol.clone()),
        ("Atomic Number", element.number.to_string()),
        ("Category", element.category_label.clone()),
        ("Period", element.period.to_string()),
        (
            "Group",
            element
                .group
                .map_or_else(|| "-".to_string(), |g| g.to_string()),
        ),
        ("Block", element.block.clone().unwrap_or_else(|| "-".to_string())),
        ("Atomic Mass", format!("{} u", element.atomic_mass)),
        ("Phase", element.phase.label().to_string()),
        ("Density", density(element.density)),
        ("Melting Point", temperature(element.melt)),
        ("Boiling Point", temperature(element.boil)),
    ];

    print_kv_table(out, &format!("{} ({})", element.name, element.symbol), &rows);
    if let Some(summary) = &element.summary {
        print_paragraph(out, "Summary", summary);
    }
    print_bullets(out, "Common Uses", &descriptor.uses);
    print_bullets(out, "Interesting Facts", &descriptor.facts);
    print_paragraph(out, "Safety", &descriptor.safety);
}

pub fn print_compound(out: &mut impl Write, compound: &Compound) {
    let props = &compound.properties;
    let mut rows = vec![
        ("Formula", compound.formula.clone()),
        ("Category", compound.category.clone()),
        ("Molecular Mass", format!("{:.3} g/mol", compound.molecular_mass)),
        ("Elements", compound.elements().join(", ")),
    ];

    let optional = [
        ("State", props.state.clone()),
        ("Color", props.color.clone()),
        ("Density", props.density.map(|d| density(Some(d)))),
        ("Melting Point", props.melting_point.map(|k| temperature(Some(k)))),
        ("Boiling Point", props.boiling_point.map(|k| temperature(Some(k)))),
        ("Bond Type", props.bond_type.clone()),
        ("Solubility", props.solubility.clone()),
        ("Reactivity", props.reactivity.clone()),
        ("Safety", props.safety.clone()),
        ("Discovery", props.discovery.clone()),
        ("Formation", props.formation_reaction.clone()),
    ];
    rows.extend(
        optional
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v))),
    );

    print_kv_table(out, &compound.name, &rows);
    print_bullets(out, "Uses", &compound.uses);
    print_bullets(out, "Facts", &compound.facts);
}

pub fn print_mix_report(out: &mut impl Write, report: &MixReport) {
    let badge = match &report.result {
        MatchResult::Exact { .. } => "✓ Exact match".to_string(),
        MatchResult::Ratio { multiplier, .. } => format!("≈ Ratio match (×{})", multiplier),
        MatchResult::Hypothetical { .. } => "? Hypothetical compound".to_string(),
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "{}{}: {}", INDENT, badge, report.message);
    let _ = writeln!(out, "{}Selection: {}", INDENT, report.selection_summary);
    if let Some(note) = report.result.note() {
        print_paragraph(out, "Note", note);
    }
    print_compound(out, report.result.compound());
}

pub fn print_question(out: &mut impl Write, number: usize, total: usize, question: &Question) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}Question {}/{}: {}", INDENT, number, total, question.prompt);
    for (i, answer) in question.answers.iter().enumerate() {
        let _ = writeln!(out, "{}  {}. {}", INDENT, i + 1, answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodica::core::catalog::Catalog;
    use periodica::core::catalog::descriptors::DescriptorTable;
    use periodica::core::models::selection::Selection;
    use periodica::engine::quiz::QuestionKind;
    use periodica::workflows::mix;

    fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn element_card_shows_properties_and_descriptors() {
        let catalog = Catalog::bundled().unwrap();
        let oxygen = catalog.elements.lookup("O").unwrap();
        let descriptor = DescriptorTable::new().describe(oxygen);

        let output = render(|out| print_element(out, oxygen, &descriptor));
        assert!(output.contains("Oxygen (O)"));
        assert!(output.contains("Atomic Number"));
        assert!(output.contains("Common Uses"));
        assert!(output.contains("Safety"));
        assert!(output.contains(" K ("));
    }

    #[test]
    fn compound_card_skips_missing_properties() {
        let catalog = Catalog::bundled().unwrap();
        let water = catalog.compounds.find_by_name_or_formula("H2O").unwrap();
        let output = render(|out| print_compound(out, water));
        assert!(output.contains("Water"));
        assert!(output.contains("g/mol"));
        assert!(output.contains("H, O"));
    }

    #[test]
    fn mix_report_shows_badge_and_note() {
        let catalog = Catalog::bundled().unwrap();
        let selection: Selection = ["H", "H", "H", "H", "O", "O"].into_iter().collect();
        let report = mix::run(&selection, &catalog).unwrap();

        let output = render(|out| print_mix_report(out, &report));
        assert!(output.contains("Ratio match (×2)"));
        assert!(output.contains("Selection: 4H + 2O"));
        assert!(output.contains("double"));
    }

    #[test]
    fn question_lists_numbered_answers() {
        let question = Question {
            kind: QuestionKind::Static,
            prompt: "Symbol for iron?".to_string(),
            answers: vec!["Fe".to_string(), "Ir".to_string()],
            correct_answer: "Fe".to_string(),
            explanation: None,
        };
        let output = render(|out| print_question(out, 1, 5, &question));
        assert!(output.contains("Question 1/5: Symbol for iron?"));
        assert!(output.contains("1. Fe"));
        assert!(output.contains("2. Ir"));
    }
}
