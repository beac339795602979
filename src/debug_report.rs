use bindery::{DispatchDetails, ParsedFileInfo, TokenSummary};

/// Styling for the `--explain` report. Each method names a role in the
/// report, so the sections below never pick raw escape codes.
struct Palette {
    enabled: bool,
}

impl Palette {
    const RESET: &'static str = "\x1b[0m";

    fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    fn style(&self, codes: &str, text: impl AsRef<str>) -> String {
        if self.enabled { format!("\x1b[{codes}m{}{}", text.as_ref(), Self::RESET) } else { text.as_ref().to_string() }
    }

    fn header(&self, path: &str) -> String {
        self.style("1;36", format!("⚙  Parsing: \"{path}\""))
    }

    fn section(&self, name: &str) -> String {
        self.style("90", format!("━━━ {name} ━━━"))
    }

    fn label(&self, text: impl AsRef<str>) -> String {
        self.style("2", text)
    }

    /// Extracted or parsed values.
    fn value(&self, text: impl AsRef<str>) -> String {
        self.style("1;32", text)
    }

    /// Input text and warnings.
    fn quoted(&self, text: impl AsRef<str>) -> String {
        self.style("33", text)
    }

    /// Strategy, token kind and bucket names.
    fn name(&self, text: impl AsRef<str>) -> String {
        self.style("34", text)
    }

    fn pattern(&self, text: impl AsRef<str>) -> String {
        self.style("36", text)
    }

    fn index(&self, idx: usize) -> String {
        self.style("90", format!("[{idx}]"))
    }

    fn timing(&self, text: impl AsRef<str>) -> String {
        self.style("32", text)
    }
}

pub fn print_run(details: &DispatchDetails, color: bool) {
    let palette = Palette::new(color);
    println!("\n{}", palette.header(&details.path));

    println!("\n{}", palette.section("Triggers"));
    println!("  {} {}", palette.label("text:"), palette.quoted(format!("\"{}\"", details.text)));
    if details.buckets.is_empty() {
        println!("  {}", palette.label("no buckets set"));
    } else {
        println!("  {} {}", palette.label("buckets:"), palette.name(details.buckets.join(" | ")));
    }

    println!("\n{}", palette.section("Tokens"));
    if details.tokens.is_empty() {
        println!("  {}", palette.label("No tokens extracted"));
    } else {
        for (idx, token) in details.tokens.iter().enumerate() {
            print_token(idx, token, &palette);
        }
    }

    println!("\n{}", palette.section("Result"));
    match (&details.strategy, &details.result) {
        (None, _) => {
            println!("  {}", palette.label("No strategy applied"));
            println!("\n{}", palette.quoted("Possible reasons:"));
            println!("  • Unsupported extension for this library type");
            println!("  • Path sits in a blacklisted folder or is a resource fork");
        }
        (Some(strategy), None) => {
            println!("  {} {}", palette.label("strategy:"), palette.name(strategy.name()));
            println!("  {}", palette.label("Skipped by strategy (cover, unmarked page or no series)"));
            println!("\n  {}", palette.label("Tip: set RUST_LOG=bindery=trace to see the skip reason"));
        }
        (Some(strategy), Some(info)) => {
            println!("  {} {}", palette.label("strategy:"), palette.name(strategy.name()));
            print_info(info, &palette);
        }
    }

    println!("\n{}", palette.section("Timing"));
    println!("  Total: {}", palette.timing(format!("{:?}", details.elapsed)));
    println!();
}

fn print_token(idx: usize, token: &TokenSummary, palette: &Palette) {
    println!(
        "  {} {} {} {}",
        palette.index(idx),
        palette.value(&token.value),
        palette.label("│"),
        palette.quoted(format!("span {}..{} \"{}\"", token.start, token.end, token.text)),
    );
    println!(
        "      {} {}  {} {}",
        palette.label("kind:"),
        palette.name(token.kind),
        palette.label("│ pattern:"),
        palette.pattern(token.pattern)
    );
}

fn print_info(info: &ParsedFileInfo, palette: &Palette) {
    let field = |name: &str, value: &str| {
        println!("  {} {}", palette.label(format!("{name}:")), palette.value(value));
    };
    field("series", &info.series);
    field("volumes", &info.volumes);
    field("chapters", &info.chapters);
    if let Some(edition) = &info.edition {
        field("edition", edition);
    }
    if let Some(title) = &info.title {
        field("title", title);
    }
    field("special", if info.is_special { "yes" } else { "no" });
    field("format", &format!("{:?}", info.format));
}
