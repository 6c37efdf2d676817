use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::parser::interface::chunk;
use crate::parser::OptionEntity;

/// Renders the help text for a list of entities.
///
/// The text is laid out in sections:
/// 1. A synopsis line.
/// 2. `Sequential arguments` (only those with a description).
/// 3. `Mandatory arguments`.
/// 4. `Optional arguments`.
///
/// Empty sections are left out.
/// Descriptions which do not fit beside their option are word-wrapped onto the following lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Printer {
    width: usize,
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_WRAP_WIDTH: usize = 17;
const ROW_INDENT: &str = "    ";

impl Default for Printer {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH)
    }
}

impl Printer {
    /// Create a printer which wraps to the `width` column.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Create a printer sized to the current terminal (or the default width, when there is no terminal).
    pub fn terminal() -> Self {
        match terminal_size() {
            Some((Width(width), _)) => Self::new(width as usize),
            None => Self::default(),
        }
    }

    /// Render the help text.
    ///
    /// The `program` name (if any) leads the synopsis line.
    pub fn render<S>(&self, program: Option<&str>, entities: &[OptionEntity<S>]) -> String {
        let mut sequentials: Vec<&OptionEntity<S>> =
            entities.iter().filter(|e| e.sequential().is_some()).collect();
        sequentials.sort_by_key(|e| e.sequential());
        let mandatory: Vec<&OptionEntity<S>> = entities
            .iter()
            .filter(|e| e.sequential().is_none() && e.is_mandatory())
            .collect();
        let optional: Vec<&OptionEntity<S>> = entities
            .iter()
            .filter(|e| e.sequential().is_none() && !e.is_mandatory())
            .collect();

        let mut lines = vec![self.synopsis(program, &sequentials, &mandatory, &optional)];
        let described: Vec<&OptionEntity<S>> = sequentials
            .into_iter()
            .filter(|e| !e.full_description().is_empty())
            .collect();

        if !described.is_empty() {
            lines.push(String::default());
            lines.push("  Sequential arguments:".to_string());
            let name_width = described
                .iter()
                .map(|e| e.full_name().chars().count())
                .max()
                .unwrap_or_default();

            for entity in described {
                let left = format!("{ROW_INDENT}{:<name_width$}   ", entity.full_name());
                self.row(&mut lines, left, entity.full_description());
            }
        }

        // Widths are shared across both option sections, so they line up.
        let name_width = mandatory
            .iter()
            .chain(optional.iter())
            .map(|e| e.full_name().chars().count() + hint(e).len())
            .max()
            .unwrap_or_default();
        let shorthand_width = mandatory
            .iter()
            .chain(optional.iter())
            .map(|e| e.shorthand().len())
            .max()
            .unwrap_or_default()
            .max(1)
            * 3
            - 1;

        for (title, section) in [
            ("  Mandatory arguments:", &mandatory),
            ("  Optional arguments:", &optional),
        ] {
            if section.is_empty() {
                continue;
            }

            lines.push(String::default());
            lines.push(title.to_string());

            for entity in section {
                let name = format!("{}{}", entity.full_name(), hint(entity));
                let shorthand = entity
                    .shorthand()
                    .iter()
                    .map(|c| format!("-{c}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                let left = format!(
                    "{ROW_INDENT}--{name:<name_width$} {shorthand:<shorthand_width$} "
                );
                self.row(&mut lines, left, entity.full_description());
            }
        }

        lines.join("\n")
    }

    fn synopsis<S>(
        &self,
        program: Option<&str>,
        sequentials: &[&OptionEntity<S>],
        mandatory: &[&OptionEntity<S>],
        optional: &[&OptionEntity<S>],
    ) -> String {
        let mut parts = vec!["usage:".to_string()];

        if let Some(program) = program.filter(|p| !p.is_empty()) {
            parts.push(program.to_string());
        }

        let optional_shorthands: String = optional
            .iter()
            .flat_map(|e| e.shorthand().iter())
            .collect();

        if !optional_shorthands.is_empty() {
            parts.push(format!("[-{optional_shorthands}]"));
        }

        let mandatory_shorthands: String = mandatory
            .iter()
            .flat_map(|e| e.shorthand().iter())
            .collect();

        if !mandatory_shorthands.is_empty() {
            parts.push(format!("-{mandatory_shorthands}"));
        }

        for entity in mandatory.iter().filter(|e| e.shorthand().is_empty()) {
            parts.push(format!("--{}{PARAMETER_HINT}", entity.full_name()));
        }

        for entity in sequentials {
            let dots = if entity.is_collection() { "..." } else { "" };

            if entity.is_mandatory() {
                parts.push(format!("{}{dots}", entity.full_name()));
            } else {
                parts.push(format!("[{}{dots}]", entity.full_name()));
            }
        }

        parts.join(" ")
    }

    fn row(&self, lines: &mut Vec<String>, left: String, description: &str) {
        let wrap_width = self
            .width
            .saturating_sub(DESCRIPTION_INDENT)
            .max(MINIMUM_WRAP_WIDTH);

        if left.chars().count() + description.chars().count() <= self.width {
            lines.push(format!("{left}{description}").trim_end().to_string());
        } else {
            lines.push(left.trim_end().to_string());

            for part in chunk(description, wrap_width) {
                lines.push(format!("{:DESCRIPTION_INDENT$}{part}", ""));
            }
        }
    }
}

fn hint<S>(entity: &OptionEntity<S>) -> &'static str {
    if entity.is_parameterized() {
        PARAMETER_HINT
    } else {
        ""
    }
}
