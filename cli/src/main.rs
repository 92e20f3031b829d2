//! rtfhtml CLI - render parsed RTF document trees to HTML

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use rtfhtml::{
    ConvertOptions, Converter, Document, DocumentParser, Inline, JsonFormat, JsonTreeParser,
    ParseOptions, RenderOptions,
};

#[derive(Parser)]
#[command(name = "rtfhtml")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render parsed RTF document trees to HTML", long_about = None)]
struct Cli {
    /// Input document tree (JSON, `-` for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document tree to HTML
    Html {
        /// Input document tree (JSON, `-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Extract plain text
    Text {
        /// Input document tree (JSON, `-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Separator between paragraphs
        #[arg(long, default_value = "\n")]
        para_breaks: String,
    },

    /// Re-emit the normalized document tree as JSON
    Json {
        /// Input document tree (JSON, `-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input document tree (JSON, `-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print render statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args, Default)]
struct RenderArgs {
    /// Surface raw markup and hyperlink fields carried by metadata nodes
    #[arg(long, env = "RTFHTML_RAW_HTML")]
    raw_html: bool,

    /// Emit the bare fragment without a document wrapper
    #[arg(long)]
    no_template: bool,

    /// Never emit font-family declarations
    #[arg(long)]
    disable_fonts: bool,

    /// Element used to wrap paragraphs
    #[arg(long, default_value = "p", value_name = "TAG")]
    para_tag: String,

    /// Separator between paragraphs
    #[arg(long, default_value = "\n", value_name = "SEP")]
    para_breaks: String,

    /// Additional metadata kind to suppress in raw mode (repeatable)
    #[arg(long = "ignore-node", value_name = "KIND")]
    ignore_nodes: Vec<String>,

    /// Skip malformed blocks instead of failing
    #[arg(long)]
    lenient: bool,
}

impl RenderArgs {
    /// Flag values used by the bare `rtfhtml <FILE>` form.
    fn default_cli() -> Self {
        Self {
            para_tag: "p".to_string(),
            para_breaks: "\n".to_string(),
            ..Self::default()
        }
    }

    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new()
            .with_raw_html(self.raw_html)
            .with_disable_fonts(self.disable_fonts)
            .with_para_tag(self.para_tag.as_str())
            .with_para_breaks(self.para_breaks.as_str());
        if self.no_template {
            options = options.without_template();
        }
        for kind in &self.ignore_nodes {
            options = options.with_ignore_node(kind.as_str());
        }
        options
    }

    fn parse_options(&self) -> ParseOptions {
        if self.lenient {
            ParseOptions::new().lenient()
        } else {
            ParseOptions::new()
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            render,
        }) => cmd_html(&input, output.as_deref(), &render),
        Some(Commands::Text {
            input,
            output,
            para_breaks,
        }) => cmd_text(&input, output.as_deref(), &para_breaks),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render to HTML if input is provided
            if let Some(input) = cli.input {
                cmd_html(&input, cli.output.as_deref(), &RenderArgs::default_cli())
            } else {
                println!("{}", "Usage: rtfhtml <FILE> [OUTPUT]".yellow());
                println!("       rtfhtml --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(input)
    }
}

fn load_document(
    input: &Path,
    options: &ParseOptions,
) -> Result<Document, Box<dyn std::error::Error>> {
    let source = read_input(input)?;
    Ok(JsonTreeParser::new().parse_str(&source, options)?)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = path {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    args: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_input(input)?;
    let options = ConvertOptions::new()
        .with_parse_options(args.parse_options())
        .with_render_options(args.render_options());

    let result = Converter::json().convert_str(&source, &options)?;
    log::debug!("Rendered {} bytes of HTML", result.content_len());

    write_output(output, &result.content)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    para_breaks: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input, &ParseOptions::new().lenient())?;
    let options = RenderOptions::new().with_para_breaks(para_breaks);
    let text = rtfhtml::to_text(&doc, &options)?;

    write_output(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input, &ParseOptions::new())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = rtfhtml::to_json(&doc, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient: report on whatever parses
    let doc = load_document(input, &ParseOptions::new().lenient())?;
    let rendered = rtfhtml::to_html_with_stats(&doc, &RenderOptions::new().without_template())?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rendered.stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    let margins = &doc.margins;
    println!(
        "{}: left {} / right {} / top {} / bottom {} (twips)",
        "Margins".bold(),
        margins.margin_left,
        margins.margin_right,
        margins.margin_top,
        margins.margin_bottom
    );
    if let Some(ref font) = doc.style.font {
        println!("{}: {} ({:?})", "Base font".bold(), font.name, font.family);
    }
    if let Some(size) = doc.style.font_size {
        println!("{}: {}pt", "Base size".bold(), f64::from(size) / 2.0);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let mut spans = 0;
    let mut metadata = 0;
    for block in &doc.content {
        for inline in &block.to_paragraph().content {
            match inline {
                Inline::Text(_) => spans += 1,
                Inline::Metadata(_) => metadata += 1,
            }
        }
    }
    let ignorable = doc.content.iter().filter(|b| b.is_ignorable()).count();
    let text = doc.plain_text();

    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Ignorable blocks".bold(), ignorable);
    println!("{}: {}", "Text spans".bold(), spans);
    println!("{}: {}", "Metadata nodes".bold(), metadata);
    println!("{}: {}", "Rendered paragraphs".bold(), rendered.stats.paragraph_count);
    println!("{}: {}", "Styled spans".bold(), rendered.stats.styled_span_count);
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "rtfhtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("RTF document tree to HTML renderer");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/rtfhtml".dimmed());
    println!("License: MIT");
}
