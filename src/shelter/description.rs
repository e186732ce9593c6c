//! # Description Text
//!
//! A pet's profile is persisted as a single free-text `description` made of
//! labelled lines:
//!
//! ```text
//! Color: Ginger white
//! Breed: Domestic Shorthair
//! Health Status: No health issues
//! Spayed/Neutered: Spayed
//! Vaccinations & Deworm: Deworm, 4-in-1
//! Description: Found under a market stall as a kitten
//! and raised by volunteers.
//! ```
//!
//! Lines without a known label continue the field above them, which lets a
//! value span several lines. Text before the first label is treated as part
//! of the "Description" field.
//!
//! A value line that would itself read as a label, such as `Breed: unknown`
//! inside a longer description, is written with one extra leading space and
//! the space is dropped again on parse.
//!
//! [`parse`] and [`compose`] convert between this text and
//! [`PetDetails`]. The canonical layout written by [`compose`] lists the
//! non-empty fields in the order above, one label per field, without a
//! trailing newline.

use crate::model::{PetDetails, SpayNeuter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Color,
    Breed,
    HealthStatus,
    SpayNeuter,
    Vaccinations,
    About,
}

impl Field {
    const ORDER: [Field; 6] = [
        Field::Color,
        Field::Breed,
        Field::HealthStatus,
        Field::SpayNeuter,
        Field::Vaccinations,
        Field::About,
    ];

    fn label(&self) -> &'static str {
        match self {
            Field::Color => "Color",
            Field::Breed => "Breed",
            Field::HealthStatus => "Health Status",
            Field::SpayNeuter => "Spayed/Neutered",
            Field::Vaccinations => "Vaccinations & Deworm",
            Field::About => "Description",
        }
    }

    /// Matches `Label:` at the start of a line and returns the trimmed value.
    fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.label())
            .and_then(|rest| rest.strip_prefix(':'))
            .map(str::trim)
    }

    fn get<'a>(&self, details: &'a PetDetails) -> &'a str {
        match self {
            Field::Color => details.color(),
            Field::Breed => details.breed(),
            Field::HealthStatus => details.health_status(),
            Field::SpayNeuter => details.spay_neuter(),
            Field::Vaccinations => details.vaccinations(),
            Field::About => details.about(),
        }
    }

    fn set(&self, details: &mut PetDetails, value: String) {
        let value = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
        match self {
            Field::Color => details.color = value,
            Field::Breed => details.breed = value,
            Field::HealthStatus => details.health_status = value,
            Field::SpayNeuter => details.spay_neuter = value.map(|v| SpayNeuter::parse(&v)),
            Field::Vaccinations => details.vaccinations = value,
            Field::About => details.about = value,
        }
    }
}

fn starts_with_label(line: &str) -> bool {
    Field::ORDER.iter().any(|field| field.strip(line).is_some())
}

/// A continuation line is escaped when, ignoring leading spaces, it starts
/// with a label.
fn is_escaped_label(line: &str) -> bool {
    starts_with_label(line.trim_start_matches(' '))
}

fn escape_line(line: &str) -> String {
    if is_escaped_label(line) {
        format!(" {}", line)
    } else {
        line.to_string()
    }
}

fn unescape_line(line: &str) -> &str {
    match line.strip_prefix(' ') {
        Some(rest) if is_escaped_label(rest) => rest,
        _ => line,
    }
}

pub fn parse(text: &str) -> PetDetails {
    let mut values: Vec<(Field, String)> = Vec::new();
    let mut preamble: Vec<&str> = Vec::new();

    for line in text.lines() {
        let labelled = Field::ORDER
            .iter()
            .find_map(|field| field.strip(line).map(|value| (*field, value)));

        match labelled {
            Some((field, value)) => {
                // A repeated label replaces the earlier value.
                values.retain(|(f, _)| *f != field);
                values.push((field, value.to_string()));
            }
            None => match values.last_mut() {
                Some((_, value)) => {
                    value.push('\n');
                    value.push_str(unescape_line(line.trim_end()));
                }
                None => preamble.push(line.trim_end()),
            },
        }
    }

    let preamble = preamble.join("\n").trim().to_string();
    if !preamble.is_empty() {
        match values.iter_mut().find(|(f, _)| *f == Field::About) {
            Some((_, about)) => *about = format!("{}\n{}", preamble, about),
            None => values.push((Field::About, preamble)),
        }
    }

    let mut details = PetDetails::default();
    for (field, value) in values {
        field.set(&mut details, value.trim_end().to_string());
    }
    details
}

pub fn compose(details: &PetDetails) -> String {
    Field::ORDER
        .iter()
        .filter_map(|field| {
            let value = field.get(details);
            if value.is_empty() {
                None
            } else {
                let mut lines = value.lines();
                let first = lines.next().unwrap_or_default();
                let rest: Vec<String> = lines.map(escape_line).collect();
                let mut text = format!("{}: {}", field.label(), first);
                for line in rest {
                    text.push('\n');
                    text.push_str(&line);
                }
                Some(text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
