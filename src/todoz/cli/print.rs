use chrono::{DateTime, Utc};
use colored::Colorize;
use console::Term;
use timeago::Formatter;
use todoz::api::{CmdMessage, MessageLevel};
use todoz::config::TodozConfig;
use todoz::model::{Filter, Todo};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_todos(todos: &[Todo], total_count: usize, filter: Filter) {
    if total_count == 0 {
        println!("No todos yet. Add one with `todoz add`.");
        return;
    }
    if todos.is_empty() {
        println!("No {} todos.", filter);
        return;
    }

    let id_width = todos
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);
    let line_width = line_width();

    for todo in todos {
        println!("{}", format_line(todo, id_width, line_width));
    }
}

pub fn print_footer(active_count: usize) {
    let noun = if active_count == 1 { "item" } else { "items" };
    println!();
    println!("{}", format!("{} {} left", active_count, noun).dimmed());
}

pub fn print_config(config: &TodozConfig) {
    for key in TodozConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn line_width() -> usize {
    let (_rows, cols) = Term::stdout().size();
    (cols as usize).clamp(40, MAX_LINE_WIDTH)
}

fn format_line(todo: &Todo, id_width: usize, line_width: usize) -> String {
    let checkbox = if todo.completed { "[x]" } else { "[ ]" };
    let idx = format!("{:>width$}. ", todo.id, width = id_width);
    let prefix = format!("  {} ", checkbox);

    let fixed = prefix.width() + idx.width() + TIME_WIDTH + 1;
    let available = line_width.saturating_sub(fixed);
    let text = truncate_to_width(&todo.text, available);
    let padding = available.saturating_sub(text.width());

    let text_colored = if todo.completed {
        text.dimmed().strikethrough()
    } else {
        text.normal()
    };
    let checkbox_colored = if todo.completed {
        prefix.green()
    } else {
        prefix.normal()
    };

    format!(
        "{}{}{}{} {}",
        checkbox_colored,
        idx.yellow(),
        text_colored,
        " ".repeat(padding),
        format_time_ago(todo.created_at).dimmed()
    )
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

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
