//! unresume CLI - section-aware resume viewer

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use unresume::{
    JsonFormat, PageContent, PageSelection, ParseOptions, PdfParser, PlainStyler, Prefetch,
    Presenter, RenderOptions, Renderer, StyleTag, Styler,
};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render resume PDFs as section-aware terminal text", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    view: ViewArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Clone)]
struct ViewArgs {
    /// Disable terminal colors and hyperlinks
    #[arg(long, env = "UNRESUME_PLAIN")]
    plain: bool,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(clap::Args, Clone)]
struct RenderArgs {
    /// Page range (e.g., "1-2", "1,3")
    #[arg(long)]
    pages: Option<String>,

    /// Apply Unicode NFKC normalization to extracted text
    #[arg(long)]
    normalize: bool,

    /// Render pages that fail to extract as empty instead of aborting
    #[arg(long)]
    lenient: bool,

    /// Page extraction strategy
    #[arg(long, value_enum, default_value = "sequential")]
    prefetch: PrefetchMode,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a resume to the terminal
    View {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Render a resume as unstyled text
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Dump extracted fragments and link annotations as JSON
    Dump {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Page range (e.g., "1-2", "1,3")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Show document information and rendering statistics
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PrefetchMode {
    /// Extract and classify one page at a time
    Sequential,
    /// Extract all pages in parallel first
    Parallel,
    /// Extract on a background thread, a few pages ahead
    Pipelined,
}

impl From<PrefetchMode> for Prefetch {
    fn from(mode: PrefetchMode) -> Self {
        match mode {
            PrefetchMode::Sequential => Prefetch::Sequential,
            PrefetchMode::Parallel => Prefetch::Parallel,
            PrefetchMode::Pipelined => Prefetch::pipelined(),
        }
    }
}

impl RenderArgs {
    fn parse_options(&self) -> Result<ParseOptions, Box<dyn std::error::Error>> {
        let mut options = ParseOptions::new()
            .with_pages(page_selection(self.pages.as_deref())?)
            .with_prefetch(self.prefetch.into());
        if self.lenient {
            options = options.lenient();
        }
        Ok(options)
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions::new().with_normalization(self.normalize)
    }
}

/// Terminal styles and OSC 8 hyperlinks.
struct TerminalStyler;

impl Styler for TerminalStyler {
    fn paint(&self, text: &str, tag: StyleTag) -> String {
        let painted = match tag {
            StyleTag::Header => text.cyan().bold().underline(),
            StyleTag::SubheaderTitle => text.bold(),
            StyleTag::SubheaderMuted => text.dimmed(),
            StyleTag::Bold => text.yellow().bold(),
            StyleTag::MutedItalic => text.dimmed().italic(),
            StyleTag::Link => text.blue().underline(),
        };
        painted.to_string()
    }

    fn hyperlink(&self, text: &str, url: &str) -> String {
        format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, text)
    }
}

/// Writes each presentation call as one line.
struct LinePresenter<'a, W: Write> {
    out: W,
    styler: &'a dyn Styler,
    error: Option<io::Error>,
}

impl<'a, W: Write> LinePresenter<'a, W> {
    fn new(out: W, styler: &'a dyn Styler) -> Self {
        Self {
            out,
            styler,
            error: None,
        }
    }

    fn write_line(&mut self, line: &str) {
        // Keep the first failure; later lines are dropped.
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "{}", line) {
                self.error = Some(e);
            }
        }
    }

    fn finish(mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => self.out.flush(),
        }
    }
}

impl<W: Write> Presenter for LinePresenter<'_, W> {
    fn emit(&mut self, text: &str) {
        self.write_line(text);
    }

    fn emit_styled(&mut self, text: &str, tag: StyleTag) {
        let painted = self.styler.paint(text, tag);
        self.write_line(&painted);
    }

    fn emit_blank(&mut self) {
        self.write_line("");
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::View { input, view }) => cmd_view(&input, &view),
        Some(Commands::Text {
            input,
            output,
            render,
        }) => cmd_text(&input, output.as_deref(), &render),
        Some(Commands::Dump {
            input,
            output,
            compact,
            pages,
        }) => cmd_dump(&input, output.as_deref(), compact, pages.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: view if input is provided
            if let Some(input) = cli.input {
                cmd_view(&input, &cli.view)
            } else {
                println!("{}", "Usage: unresume <FILE>".yellow());
                println!("       unresume --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn page_selection(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    Ok(match pages {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    })
}

fn open_input(input: &Path, args: &RenderArgs) -> Result<PdfParser, Box<dyn std::error::Error>> {
    let options = args.parse_options()?;
    Ok(PdfParser::open_with_options(input, options)?)
}

fn render_parsed<W: Write>(
    parser: &PdfParser,
    args: &RenderArgs,
    styler: &dyn Styler,
    out: W,
) -> Result<unresume::RenderStats, Box<dyn std::error::Error>> {
    let renderer = Renderer::new(args.render_options(), styler);
    let mut presenter = LinePresenter::new(out, styler);
    let stats = renderer.render_source(parser, parser.options(), &mut presenter)?;
    presenter.finish()?;
    Ok(stats)
}

fn render_to<W: Write>(
    input: &Path,
    args: &RenderArgs,
    styler: &dyn Styler,
    out: W,
) -> Result<unresume::RenderStats, Box<dyn std::error::Error>> {
    let parser = open_input(input, args)?;
    render_parsed(&parser, args, styler, out)
}

fn cmd_view(input: &Path, view: &ViewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    if view.plain {
        colored::control::set_override(false);
        render_to(input, &view.render, &PlainStyler, out)?;
    } else {
        render_to(input, &view.render, &TerminalStyler, out)?;
    }
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    render: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        // The output file is only created once the input opened as a PDF.
        let parser = open_input(input, render)?;
        let file = BufWriter::new(fs::File::create(path)?);
        render_parsed(&parser, render, &PlainStyler, file)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        let stdout = io::stdout();
        render_to(input, render, &PlainStyler, BufWriter::new(stdout.lock()))?;
    }
    Ok(())
}

fn cmd_dump(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().with_pages(page_selection(pages)?);
    let parser = PdfParser::open_with_options(input, options)?;

    let contents = parser
        .page_numbers()
        .into_iter()
        .map(|n| parser.page_content(n))
        .collect::<unresume::Result<Vec<PageContent>>>()?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = unresume::render::to_json(&contents, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient so that statistics are shown even if a page fails
    let options = ParseOptions::new().lenient();
    let parser = PdfParser::open_with_options(input, options.clone())?;

    let renderer = Renderer::new(RenderOptions::default(), &PlainStyler);
    let mut sink = LinePresenter::new(io::sink(), &PlainStyler);
    let stats = renderer.render_source(&parser, &options, &mut sink)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), parser.version());
    println!("{}: {}", "Pages".bold(), parser.page_count());

    println!();
    println!("{}", "Rendering Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Tokens".bold(), stats.tokens);
    println!("{}: {}", "Linked tokens".bold(), stats.linked_tokens);
    println!("{}: {}", "Lines".bold(), stats.lines);
    println!("{}: {}", "Section headers".bold(), stats.section_headers);
    if stats.dropped_education_lines > 0 {
        println!(
            "{}: {}",
            "Dropped education lines".bold(),
            stats.dropped_education_lines.to_string().yellow()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Section-aware resume viewer");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unresume".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperlink_escape() {
        assert_eq!(
            TerminalStyler.hyperlink("site", "https://example.com"),
            "\x1b]8;;https://example.com\x1b\\site\x1b]8;;\x1b\\"
        );
    }

    #[test]
    fn test_line_presenter_writes_lines() {
        let mut buf = Vec::new();
        {
            let mut presenter = LinePresenter::new(&mut buf, &PlainStyler);
            presenter.emit_styled("SKILLS", StyleTag::Header);
            presenter.emit_blank();
            presenter.emit("Tools: Git");
            presenter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "SKILLS\n\nTools: Git\n");
    }

    #[test]
    fn test_text_to_file_rejects_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, "not a pdf").unwrap();

        let args = RenderArgs {
            pages: None,
            normalize: false,
            lenient: true,
            prefetch: PrefetchMode::Sequential,
        };
        let result = render_to(&input, &args, &PlainStyler, io::sink());
        assert!(result.is_err());
    }

    #[test]
    fn test_text_output_not_created_for_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, "not a pdf").unwrap();
        let output = dir.path().join("out.txt");

        let args = RenderArgs {
            pages: None,
            normalize: false,
            lenient: false,
            prefetch: PrefetchMode::Sequential,
        };
        assert!(cmd_text(&input, Some(&output), &args).is_err());
        assert!(!output.exists());

        let missing = dir.path().join("missing.pdf");
        assert!(cmd_text(&missing, Some(&output), &args).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_page_range() {
        assert!(page_selection(Some("3-1")).is_err());
        assert!(matches!(page_selection(None), Ok(PageSelection::All)));
    }

    #[test]
    fn test_cli_parses_default_view() {
        let cli = Cli::try_parse_from(["unresume", "resume.pdf", "--plain", "--pages", "1"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("resume.pdf")));
        assert!(cli.view.plain);
        assert_eq!(cli.view.render.pages.as_deref(), Some("1"));
    }
}
