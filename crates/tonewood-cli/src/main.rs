use facet::Facet;
use facet_args as args;
use std::io::{self, Read};
use std::path::Path;
use tonewood::{AnsiHighlighter, Highlighter, HtmlFormat};
use tonewood_theme::{CssFormat, Palette, builtin, palette_to_css};

/// Tonewood token styler - renders a lexer's token dump with colors
#[derive(Debug, Facet)]
struct Args {
    /// Output HTML instead of ANSI escape sequences
    #[facet(args::named, default)]
    html: bool,

    /// Print the palette stylesheet instead of rendering input
    #[facet(args::named, default)]
    css: bool,

    /// Use class-based output (spans/selectors) instead of custom elements
    #[facet(args::named, default)]
    classes: bool,

    /// Palette name (dusk, daylight)
    #[facet(args::named, args::short = 't', default)]
    theme: Option<String>,

    /// Input: token dump file, or '-' for stdin
    ///
    /// Each line of the dump is `class<TAB>text` with `\n`, `\t` and `\\`
    /// escaped in the text, the format lexer dump tools emit.
    #[facet(args::positional, default)]
    input: Option<String>,
}

fn main() {
    let args: Args = facet_args::from_std_args().unwrap_or_else(|e| {
        if let Some(text) = e.help_text() {
            eprintln!("{text}");
        } else {
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    });

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let palette = select_palette(args.theme.as_deref())?;

    if args.css {
        let format = if args.classes {
            CssFormat::ClassNames
        } else {
            CssFormat::CustomElements
        };
        print!("{}", palette_to_css(&palette, &format));
        return Ok(());
    }

    let dump = read_input(args.input.as_deref())?;

    if args.html {
        let format = if args.classes {
            HtmlFormat::ClassNames
        } else {
            HtmlFormat::CustomElements
        };
        let highlighter = Highlighter::with_format(format);
        let html = highlighter
            .highlight_dump(&dump)
            .map_err(|e| format!("Highlighting failed: {}", e))?;
        println!("{}", html);
    } else {
        let highlighter = AnsiHighlighter::new(palette);
        let ansi = highlighter
            .highlight_dump(&dump)
            .map_err(|e| format!("Highlighting failed: {}", e))?;
        println!("{}", ansi);
    }

    Ok(())
}

fn select_palette(name: Option<&str>) -> Result<Palette, String> {
    match name {
        None | Some("dusk") => Ok(builtin::dusk()),
        Some("daylight") => Ok(builtin::daylight()),
        Some(other) => Err(format!(
            "Unknown theme: {}. Valid themes: dusk, daylight",
            other
        )),
    }
}

fn read_input(input: Option<&str>) -> Result<String, String> {
    match input {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(buffer)
        }
        Some(path) => {
            let path = Path::new(path);
            std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))
        }
    }
}
