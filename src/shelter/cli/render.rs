use chrono::{DateTime, Utc};
use colored::Colorize;
use shelter::api::{CmdMessage, MessageLevel};
use shelter::config::ShelterConfig;
use shelter::index::DisplayPet;
use shelter::model::Pet;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const KIND_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_pet_list(pets: &[DisplayPet]) {
    print!("{}", render_pet_list(pets, Utc::now()));
}

pub(super) fn print_full_pets(pets: &[DisplayPet]) {
    print!("{}", render_full_pets(pets));
}

pub(super) fn print_config(config: &ShelterConfig) {
    for (key, value) in config.list_all() {
        println!("{} = {}", key, value);
    }
}

fn render_pet_list(pets: &[DisplayPet], now: DateTime<Utc>) -> String {
    if pets.is_empty() {
        return "No pets found.\n".to_string();
    }

    let idx_width = pets
        .iter()
        .map(|dp| format!("{}.", dp.index).width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for dp in pets {
        let idx = format!("{:>width$} ", format!("{}.", dp.index), width = idx_width);
        let kind = pad_to_width(&format!("{} {}", dp.pet.gender, dp.pet.species), KIND_WIDTH);
        let added = format_time_ago(dp.pet.added_at, now);

        let fixed = idx.width() + KIND_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let summary = truncate_to_width(
            &format!("{}, {}", dp.pet.name, dp.pet.age_label()),
            available,
        );
        let padding = available.saturating_sub(summary.width());

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            idx.yellow(),
            kind.cyan(),
            summary,
            " ".repeat(padding),
            added.dimmed()
        ));
    }
    out
}

fn render_full_pets(pets: &[DisplayPet]) -> String {
    let mut out = String::new();
    for (i, dp) in pets.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        out.push_str(&format!(
            "{} {}\n",
            format!("{}.", dp.index).yellow(),
            dp.pet.name.bold()
        ));
        out.push_str("--------------------------------\n");
        for (label, value) in profile_rows(&dp.pet) {
            if value.is_empty() {
                continue;
            }
            let label = format!("{:<14}", format!("{}:", label));
            out.push_str(&format!("{} {}\n", label.dimmed(), value));
        }
    }
    out
}

fn profile_rows(pet: &Pet) -> Vec<(&'static str, String)> {
    let details = &pet.details;
    vec![
        ("Species", pet.species.to_string()),
        ("Gender", pet.gender.to_string()),
        ("Age", pet.age_label()),
        ("Color", details.color().to_string()),
        ("Breed", details.breed().to_string()),
        ("Health", details.health_status().to_string()),
        ("Spay/Neuter", details.spay_neuter().to_string()),
        ("Vaccinations", details.vaccinations().to_string()),
        ("About", details.about().to_string()),
        ("Image", pet.image_path.clone()),
        ("Id", pet.id.to_string()),
    ]
}

fn pad_to_width(s: &str, width: usize) -> String {
    let s = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shelter::index::index_pets;
    use shelter::model::{Gender, NewPet, Species};

    fn display(name: &str) -> DisplayPet {
        let pet = Pet::new(
            NewPet::new(Species::Dog, name, Gender::Female)
                .with_age(1, 2)
                .with_image("img.png"),
        )
        .unwrap();
        index_pets([&pet]).remove(0)
    }

    #[test]
    fn empty_list() {
        assert_eq!(render_pet_list(&[], Utc::now()).trim(), "No pets found.");
    }

    #[test]
    fn list_line_shows_name_and_age() {
        colored::control::set_override(false);
        let dp = display("Billie");
        let out = render_pet_list(&[dp.clone()], dp.pet.added_at + Duration::days(3));
        assert!(out.contains("1. "));
        assert!(out.contains("Female Dog"));
        assert!(out.contains("Billie, 1 years & 2 months"));
        assert!(out.contains("3 days ago"));
    }

    #[test]
    fn long_names_are_truncated() {
        colored::control::set_override(false);
        let dp = display(&"x".repeat(200));
        let out = render_pet_list(&[dp], Utc::now());
        assert!(out.contains('…'));
        assert!(out.lines().all(|l| l.width() <= LINE_WIDTH));
    }

    #[test]
    fn full_view_skips_empty_fields() {
        colored::control::set_override(false);
        let out = render_full_pets(&[display("Billie")]);
        assert!(out.contains("Age:"));
        assert!(!out.contains("Breed:"));
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }
}
