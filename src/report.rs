use hexcast::registry::RegistryIssue;
use hexcast::{Line, LineState, Reading, ReadingDetails, Structure, TrigramDescriptor};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_reading(reading: &Reading, details: Option<&ReadingDetails>, color: bool) {
    let palette = ansi::Palette::new(color);

    let question = if reading.question.trim().is_empty() { "(no question)" } else { reading.question.trim() };
    println!("\n{}", palette.bold(palette.paint(format!("☯  Question: \"{}\"", question), ansi::CYAN)));
    println!("{}", palette.dim(format!("   {}", reading.timestamp)));

    println!("\n{}", palette.paint("━━━ Primary ━━━", ansi::GRAY));
    print_structure_body(&reading.structure, &palette);

    if reading.has_changes() {
        let positions: Vec<String> = reading.changing_positions.iter().map(|p| p.to_string()).collect();
        println!("\n{}", palette.paint("━━━ Changing lines ━━━", ansi::GRAY));
        println!("  {} {}", palette.dim("positions:"), palette.paint(positions.join(", "), ansi::YELLOW));
        for line in reading.changing_lines() {
            print_line_text(line, &palette);
        }
    }

    if let Some(successor) = &reading.successor {
        println!("\n{}", palette.paint("━━━ Becoming ━━━", ansi::GRAY));
        print_structure_body(successor, &palette);
    }

    if let Some(details) = details {
        println!("\n{}", palette.paint("━━━ Cast ━━━", ansi::GRAY));
        print_trace(details, &palette);
    }
    println!();
}

pub fn print_structure(structure: &Structure, color: bool) {
    let palette = ansi::Palette::new(color);
    println!();
    print_structure_body(structure, &palette);
    println!("\n{}", palette.paint("━━━ Lines ━━━", ansi::GRAY));
    for line in &structure.lines {
        print_line_text(line, &palette);
    }
    println!();
}

pub fn print_trigram(descriptor: &TrigramDescriptor, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n  {} {} {}",
        palette.bold(descriptor.symbol.to_string()),
        palette.bold(palette.paint(descriptor.name, ansi::GREEN)),
        palette.dim(format!("{} {:?}", descriptor.local_name, descriptor.trigram)),
    );
    println!("  {} {:?}", palette.dim("element:"), descriptor.element);
    println!("  {} {}\n", palette.dim("attribute:"), descriptor.attribute);
}

pub fn print_issues(issues: &[RegistryIssue], color: bool) {
    let palette = ansi::Palette::new(color);
    if issues.is_empty() {
        println!("{}", palette.paint("✓ registry complete: 64 entries, every key covered", ansi::GREEN));
        return;
    }

    println!("{}", palette.paint(format!("✗ {} registry issue(s)", issues.len()), ansi::RED));
    for issue in issues {
        println!("  • {issue}");
    }
}

fn print_structure_body(structure: &Structure, palette: &ansi::Palette) {
    let upper = structure.triads.upper;
    let lower = structure.triads.lower;
    println!(
        "  {} {} {}",
        palette.paint(format!("[{}]", structure.id), ansi::GRAY),
        palette.bold(palette.paint(&structure.name, ansi::GREEN)),
        palette.dim(&structure.local_name),
    );
    println!(
        "  {} {} {} over {} {}",
        palette.dim("trigrams:"),
        upper.symbol(),
        palette.paint(upper.name(), ansi::BLUE),
        lower.symbol(),
        palette.paint(lower.name(), ansi::BLUE),
    );

    // Top line first, as the figure is drawn.
    for line in structure.lines.iter().rev() {
        println!("      {}", fmt_line_figure(line, palette));
    }

    println!("  {} {}", palette.dim("judgment:"), structure.commentary);
    println!("  {} {}", palette.dim("image:"), structure.image_text);
    println!("  {} {}", palette.dim("guidance:"), structure.interpretation.guidance);
}

fn print_line_text(line: &Line, palette: &ansi::Palette) {
    println!("  {} {}", palette.paint(format!("{}.", line.position), ansi::YELLOW), line.text);
    println!("     {}", palette.dim(&line.meaning));
}

fn print_trace(details: &ReadingDetails, palette: &ansi::Palette) {
    for t in &details.trace {
        let tosses: Vec<&str> =
            t.tosses.iter().map(|c| if *c == hexcast::Coin::Heads { "H" } else { "T" }).collect();
        println!(
            "  {} {}  {} {}",
            palette.paint(format!("line {}", t.position), ansi::BLUE),
            tosses.join(" "),
            palette.dim("→"),
            fmt_state(t.state),
        );
    }

    let successor = details.successor_key.map(|k| k.to_string()).unwrap_or_else(|| "-".to_string());
    println!(
        "  {} {}  │  {} {}",
        palette.dim("key:"),
        palette.paint(details.primary_key.to_string(), ansi::YELLOW),
        palette.dim("becoming:"),
        palette.paint(successor, ansi::YELLOW),
    );
    if !details.fallbacks.is_empty() {
        let keys: Vec<String> = details.fallbacks.iter().map(|k| k.to_string()).collect();
        println!("  {} {}", palette.paint("fallback used for:", ansi::RED), keys.join(", "));
    }
    println!(
        "  {} {}  │  {} {}",
        palette.dim("cast:"),
        palette.paint(format!("{:?}", details.cast), ansi::GREEN),
        palette.dim("total:"),
        palette.paint(format!("{:?}", details.total), ansi::CYAN),
    );
}

fn fmt_line_figure(line: &Line, palette: &ansi::Palette) -> String {
    let figure = if line.state.is_yang() { "━━━━━━━━━" } else { "━━━━   ━━━━" };
    let figure = if line.state.is_yang() { format!("{figure}  ") } else { figure.to_string() };
    match line.state {
        LineState::ChangingYang => format!("{} {}", palette.paint(figure, ansi::YELLOW), palette.paint("○", ansi::YELLOW)),
        LineState::ChangingYin => format!("{} {}", palette.paint(figure, ansi::YELLOW), palette.paint("×", ansi::YELLOW)),
        _ => figure,
    }
}

fn fmt_state(state: LineState) -> &'static str {
    match state {
        LineState::StableYin => "stable yin",
        LineState::StableYang => "stable yang",
        LineState::ChangingYin => "changing yin",
        LineState::ChangingYang => "changing yang",
    }
}
