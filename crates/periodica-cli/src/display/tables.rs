use std::io::Write;

use periodica::core::models::element::Element;

use crate::utils::text::{pad, truncate, wrap};

pub const INDENT: &str = "  ";

const TABLE_WIDTH: usize = 74;
const KEY_W: usize = 16;

pub fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let sep_overhead = 7;
    let val_w = TABLE_WIDTH.saturating_sub(KEY_W + sep_overhead);

    print_title(out, title);
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(KEY_W + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        for (i, line) in wrap(val, val_w).iter().enumerate() {
            let key_cell = if i == 0 { *key } else { "" };
            let _ = writeln!(
                out,
                "{}│ {} │ {} │",
                INDENT,
                pad(key_cell, KEY_W),
                pad(line, val_w)
            );
        }
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(KEY_W + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

/// Prints elements as a one-row-per-element table.
pub fn print_element_table(out: &mut impl Write, title: &str, elements: &[&Element]) {
    let num_w = 3usize;
    let sym_w = 3usize;
    let name_w = 13usize;
    let mass_w = 10usize;
    let phase_w = 7usize;
    let sep_overhead = 3 * 6 + 1;
    let cat_w =
        TABLE_WIDTH.saturating_sub(num_w + sym_w + name_w + mass_w + phase_w + sep_overhead);

    let widths = [num_w, sym_w, name_w, cat_w, mass_w, phase_w];
    let border = |left: &str, mid: &str, right: &str| {
        let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}{}", INDENT, left, cells.join(mid), right)
    };

    print_title(out, title);
    let _ = writeln!(out, "{}", border("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:>num_w$} │ {:<sym_w$} │ {:<name_w$} │ {:<cat_w$} │ {:>mass_w$} │ {:<phase_w$} │",
        INDENT,
        "No",
        "Sym",
        "Name",
        "Category",
        "Mass (u)",
        "Phase",
    );
    let _ = writeln!(out, "{}", border("├", "┼", "┤"));

    for element in elements {
        let _ = writeln!(
            out,
            "{}│ {:>num_w$} │ {} │ {} │ {} │ {:>mass_w$.3} │ {} │",
            INDENT,
            element.number,
            pad(&element.symbol, sym_w),
            pad(&element.name, name_w),
            pad(&element.category_label, cat_w),
            element.atomic_mass,
            pad(element.phase.label(), phase_w),
        );
    }

    let _ = writeln!(out, "{}", border("└", "┴", "┘"));
}

/// Prints a titled bullet list, wrapping long items.
pub fn print_bullets(out: &mut impl Write, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let text_w = TABLE_WIDTH.saturating_sub(4);

    print_title(out, title);
    for item in items {
        for (i, line) in wrap(item, text_w).iter().enumerate() {
            let marker = if i == 0 { "•" } else { " " };
            let _ = writeln!(out, "{}{} {}", INDENT, marker, line);
        }
    }
}

/// Prints a wrapped paragraph under a title.
pub fn print_paragraph(out: &mut impl Write, title: &str, text: &str) {
    print_title(out, title);
    for line in wrap(text, TABLE_WIDTH.saturating_sub(2)) {
        let _ = writeln!(out, "{}{}", INDENT, line);
    }
}

fn print_title(out: &mut impl Write, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, TABLE_WIDTH.saturating_sub(6))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::text::display_width;
    use periodica::core::models::element::Category;

    fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    fn table_lines(output: &str) -> Vec<&str> {
        output
            .lines()
            .filter(|l| {
                let t = l.trim_start();
                (t.starts_with('┌') && !t.starts_with("┌─ "))
                    || t.starts_with('│')
                    || t.starts_with('├')
                    || t.starts_with('└')
            })
            .collect()
    }

    #[test]
    fn kv_table_rows_share_one_width() {
        let rows = vec![
            ("Formula", "H2O".to_string()),
            (
                "Uses",
                "A very long value that certainly needs more than one line to fit inside the value column of the table".to_string(),
            ),
            ("Density", "0.997 g/cm³".to_string()),
        ];
        let output = render(|out| print_kv_table(out, "Water", &rows));

        assert!(output.contains("┌─ Water ─┐"));
        let lines = table_lines(&output);
        assert!(lines.len() >= 6);
        let width = display_width(lines[0]);
        assert!(lines.iter().all(|l| display_width(l) == width));
    }

    #[test]
    fn element_table_lists_each_element() {
        let hydrogen = Element::new(1, "H", "Hydrogen", Category::DiatomicNonmetal, 1.008);
        let helium = Element::new(2, "He", "Helium", Category::NobleGas, 4.0026);
        let output = render(|out| print_element_table(out, "Elements", &[&hydrogen, &helium]));

        assert!(output.contains("Hydrogen"));
        assert!(output.contains("4.003"));
        let lines = table_lines(&output);
        assert_eq!(lines.len(), 6);
        let width = display_width(lines[0]);
        assert!(lines.iter().all(|l| display_width(l) == width));
    }

    #[test]
    fn empty_bullet_list_prints_nothing() {
        assert!(render(|out| print_bullets(out, "Uses", &[])).is_empty());
        let output = render(|out| print_bullets(out, "Uses", &["Fuel".to_string()]));
        assert!(output.contains("• Fuel"));
    }
}
