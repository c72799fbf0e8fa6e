use clap::Parser;
use mkpost::generate::PostGenerator;
use mkpost::template::TemplateSpec;
use mkpost::types::PostRequest;
use mkpost::{config, output};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mkpost")]
#[command(version)]
#[command(about = "Generate Jekyll posts with validated front matter")]
#[command(long_about = "\
Generate Jekyll posts with validated front matter

Each run writes one markdown file named YYYY-MM-DD-<slug>.md into the
output directory, with a front matter header like:

  ---
  title: My New Post
  date: 2023-12-25 10:00:00 +0530
  categories: [Tech, Python]
  tags: [python, tutorial]
  ---

Optional author/description lines and repeatable --field KEY=VALUE pairs
extend the header. An mkpost.toml in the working directory can set
defaults for the output directory, timezone, and author; CLI flags win.

Examples:
  mkpost \"My New Post\" Tech Python python,tutorial
  mkpost \"Travel Notes\" Lifestyle Travel vacation --author \"John Doe\"
  mkpost \"Old Post\" Tech AI machine-learning --date 2023-01-15 --force
  mkpost \"Custom Post\" Tech Web html,css --template post.hbs")]
struct Cli {
    /// Title of the post
    title: String,

    /// Primary category
    top_category: String,

    /// Secondary category
    sub_category: String,

    /// Comma-separated tags (up to 10, lowercased)
    tags: String,

    /// Directory where the post is written
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// IANA timezone for the post timestamp
    #[arg(long)]
    timezone: Option<String>,

    /// Author of the post (max 100 characters)
    #[arg(long, short = 'a')]
    author: Option<String>,

    /// Description of the post (max 500 characters)
    #[arg(long, short = 'd')]
    description: Option<String>,

    /// Backdate the post (YYYY-MM-DD, midnight in the configured timezone)
    #[arg(long)]
    date: Option<String>,

    /// Path to a custom Handlebars template file
    #[arg(long, short = 't')]
    template: Option<PathBuf>,

    /// Overwrite an existing post without asking
    #[arg(long, short = 'f')]
    force: bool,

    /// Extra front matter field (repeatable, order preserved)
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    fields: Vec<(String, String)>,
}

/// Parse one `--field KEY=VALUE` argument.
fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = config::load(Path::new("."))?;

    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&defaults.output_dir));
    let timezone = cli.timezone.unwrap_or_else(|| defaults.timezone.clone());
    let author = cli.author.or(defaults.author);

    let template = match &cli.template {
        Some(path) => TemplateSpec::from_file(path)?,
        None => TemplateSpec::Default,
    };

    let request = PostRequest {
        title: cli.title,
        top_category: cli.top_category,
        sub_category: cli.sub_category,
        tags: cli.tags,
        author,
        description: cli.description,
        date: cli.date,
        custom_fields: cli.fields,
        force: cli.force,
    };

    let generator = PostGenerator::new(output_dir, &timezone, template)?;
    let outcome = generator.generate(
        &request,
        &mut prompt_overwrite,
        &mut |event| println!("{}", output::format_event(&event)),
    )?;
    println!("{}", output::format_outcome(&outcome));
    Ok(())
}

/// Ask on stderr and read one line from stdin. EOF or a read error counts
/// as a decline, so an interrupted prompt never overwrites anything.
fn prompt_overwrite(path: &Path) -> bool {
    eprint!("{}", output::overwrite_prompt(path));
    let _ = std::io::stderr().flush();
    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(answer.trim_start().chars().next(), Some('y' | 'Y')),
    }
}
