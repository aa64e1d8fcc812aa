use console::Style;
use ecostay_core::rating::Star;

pub fn print_header(title: &str) {
    println!("\n{}", Style::new().bold().green().apply_to(title));
    println!(
        "{}",
        Style::new()
            .dim()
            .apply_to("─".repeat(console::measure_text_width(title)))
    );
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("ERROR:"), msg);
}

pub fn print_note(msg: &str) {
    println!("{}", Style::new().dim().italic().apply_to(msg));
}

pub fn print_panel(title: &str, content: &str, border_color: Style) {
    let width: usize = 80;
    let title_width = console::measure_text_width(title);
    let padding = width.saturating_sub(title_width + 5);

    println!(
        "{} {} {}",
        border_color.apply_to("┌─"),
        Style::new().bold().apply_to(title),
        border_color.apply_to(format!("{}┐", "─".repeat(padding)))
    );

    for line in content.lines() {
        // keep blank lines from multi-line descriptions
        let wrapped = if line.is_empty() {
            vec![std::borrow::Cow::Borrowed("")]
        } else {
            textwrap::wrap(line, width - 4)
        };

        for wrapped_line in wrapped {
            let display_width = console::measure_text_width(&wrapped_line);
            let space = (width - 4).saturating_sub(display_width);

            println!(
                "{} {}{} {}",
                border_color.apply_to("│"),
                wrapped_line,
                " ".repeat(space),
                border_color.apply_to("│")
            );
        }
    }
    println!("{}", border_color.apply_to(format!("└{}┘", "─".repeat(width - 2))));
}

/// Five stars, filled ones yellow.
pub fn stars(stars: &[Star]) -> String {
    stars
        .iter()
        .map(|star| {
            let style = if star.is_filled() {
                Style::new().yellow()
            } else {
                Style::new().dim()
            };
            style.apply_to(Star::SYMBOL).to_string()
        })
        .collect()
}

pub fn print_key_value(key: &str, value: &str) {
    println!(
        "{}: {}",
        Style::new().dim().apply_to(key),
        Style::new().bold().apply_to(value)
    );
}
