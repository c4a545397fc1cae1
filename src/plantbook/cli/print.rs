use chrono::{DateTime, Utc};
use colored::Colorize;
use plantbook::api::{CmdMessage, MessageLevel};
use plantbook::config::PlantbookConfig;
use plantbook::error::PlantbookError;
use plantbook::model::{PlantFields, PlantRecord};
use plantbook::record_view::{RecordView, ViewState};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 72;
const TIME_WIDTH: usize = 16;
const ID_WIDTH: usize = 4;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(err: &PlantbookError) {
    println!("{}", err.to_string().red());
}

pub(super) fn print_plants(plants: &[PlantRecord]) {
    if plants.is_empty() {
        println!("No plants yet. Use `add` to record one.");
        return;
    }

    for plant in plants {
        let idx_str = format!("{:>width$}. ", plant.id, width = ID_WIDTH);
        let time_ago = format_time_ago(plant.created_at);

        let fixed_width = idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name = truncate_to_width(&plant.name, available);
        let padding = available.saturating_sub(name.width());

        println!(
            "{}{}{}{}",
            idx_str.yellow(),
            name,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

pub(super) fn print_record(plant: &PlantRecord, config: &PlantbookConfig) {
    println!(
        "{}",
        format!("Added: {}", config.format_added(&plant.created_at)).dimmed()
    );
    println!("{}", photo_label(plant.photo.as_deref(), config));
    println!("{}", plant.name.bold().green());
    if let Some(notes) = &plant.notes {
        println!("{}", notes);
    }
}

pub(super) fn print_draft(view: &RecordView, draft: &PlantFields, config: &PlantbookConfig) {
    let header = match (view.state(), view.record_id()) {
        (ViewState::Editing, Some(id)) => format!("Editing plant {}", id),
        _ => "New plant".to_string(),
    };
    println!("{}", header.bold());
    println!("  photo: {}", photo_label(draft.photo.as_deref(), config));
    println!("  name:  {}", draft.name);
    println!("  notes: {}", draft.notes.as_deref().unwrap_or(""));
    println!(
        "{}",
        "name <text> | notes <text> | photo <path> | save | cancel".dimmed()
    );
}

pub(super) fn print_config(config: &PlantbookConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn photo_label(photo: Option<&str>, config: &PlantbookConfig) -> String {
    match photo {
        None => config.placeholder.dimmed().to_string(),
        Some(reference) if reference.starts_with("data:") => {
            let mime = reference
                .trim_start_matches("data:")
                .split(';')
                .next()
                .unwrap_or("image");
            format!("embedded {} ({} bytes encoded)", mime, reference.len())
        }
        Some(reference) => truncate_to_width(reference, LINE_WIDTH),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > budget {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_names() {
        let out = truncate_to_width("Monstera deliciosa variegata", 10);
        assert_eq!(out.width(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn keeps_short_names() {
        assert_eq!(truncate_to_width("Aloe", 10), "Aloe");
    }

    #[test]
    fn name_exactly_at_width_is_kept_whole() {
        assert_eq!(truncate_to_width("Ficus", 5), "Ficus");
        assert_eq!(truncate_to_width("Ficus!", 5), "Ficu…");
    }

    #[test]
    fn data_uri_label_hides_payload() {
        let config = PlantbookConfig::default();
        let label = photo_label(Some("data:image/png;base64,AAAA"), &config);
        assert_eq!(label, "embedded image/png (26 bytes encoded)");
    }

    #[test]
    fn time_ago_is_padded() {
        assert_eq!(format_time_ago(Utc::now()).len(), TIME_WIDTH);
    }
}
