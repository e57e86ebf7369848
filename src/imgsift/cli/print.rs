use colored::Colorize;
use imgsift::api::{CmdMessage, CriterionInfo, MessageLevel};
use imgsift::config::{ViewConfig, CONFIG_KEYS};
use imgsift::model::RenderPlan;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 40;

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

pub(super) fn print_plan(plan: &RenderPlan, captions: &[String]) {
    if plan.visible_count() == 0 {
        println!("No records match.");
    }

    let mut captions = captions.iter();
    for bucket in &plan.buckets {
        if bucket.members.is_empty() {
            continue;
        }
        if let Some(label) = &bucket.label {
            println!(
                "{} {}",
                label.bold().cyan(),
                format!("({})", bucket.members.len()).dimmed()
            );
        }
        for id in &bucket.members {
            let caption = captions.next().map(String::as_str).unwrap_or("");
            println!("{}", tile_line(id, caption));
        }
    }

    if !plan.hidden.is_empty() {
        println!("{}", format!("{} hidden", plan.hidden.len()).dimmed());
    }
}

/// `    id<padding>caption`, fitted to the line width.
fn tile_line(id: &str, caption: &str) -> String {
    let id = truncate_to_width(id, ID_WIDTH);
    let padding = ID_WIDTH.saturating_sub(id.width()) + 2;
    let available = LINE_WIDTH.saturating_sub(4 + ID_WIDTH + 2);
    format!(
        "    {}{}{}",
        id,
        " ".repeat(padding),
        truncate_to_width(caption, available).dimmed()
    )
}

pub(super) fn print_plan_json(plan: &RenderPlan) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(plan)?);
    Ok(())
}

pub(super) fn print_criteria(criteria: &[CriterionInfo]) {
    let width = criteria.iter().map(|c| c.id.width()).max().unwrap_or(0);
    for c in criteria {
        let direction = if c.descending { "descending" } else { "ascending" };
        println!(
            "  {}{}  {}",
            c.id,
            " ".repeat(width - c.id.width()),
            direction.dimmed()
        );
    }
}

pub(super) fn print_attributes(attributes: &[(&str, String)]) {
    let width = attributes.iter().map(|(n, _)| n.width()).max().unwrap_or(0);
    for (name, value) in attributes {
        println!(
            "{}{}  {}",
            name.yellow(),
            " ".repeat(width - name.width()),
            value
        );
    }
}

pub(super) fn print_config(config: &ViewConfig) {
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key, value);
    }
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
