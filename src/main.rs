use clap::{Parser, Subcommand};
use leafpress::{config, output, render, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leafpress")]
#[command(about = "Static site generator for hierarchical markdown content")]
#[command(long_about = "\
Static site generator for hierarchical markdown content

Markdown files with key: value front-matter become pages; each page names
its template and, optionally, a parent page. Parent references assemble the
pages into a tree that templates receive as navigation context, and links
between pages are rewritten to be path-relative, so the output works from
any mount point — a web root, a subdirectory, or file://.

Content structure:

  content/
  ├── config.toml              # Site config (optional)
  ├── index.md                 # Root page (no parent)
  ├── about.md                 # Another root page
  └── guide/
      ├── guide.md             # parent: index
      └── install.md           # parent: guide

  templates/
  ├── page.html                # Referenced by front-matter: template: page.html
  └── static/                  # Copied verbatim into output/static/

Front-matter keys:
  template:     required — template file to render this page with
  title:        page title (defaults to the filename)
  title_short:  short title for navigation (defaults to title)
  parent:       name of the parent page (filename without extension)
  sort:         integer sort key exposed to templates (default 1)
  in_nav:       '1' or 'true' to show in navigation (default true)

Any other key is passed through to templates under page.extra.

Run 'leafpress gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Template directory
    #[arg(long, default_value = "templates", global = true)]
    templates: PathBuf,

    /// Output directory
    #[arg(long, default_value = "output", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Clone)]
struct BuildArgs {
    /// Skip copying templates/static/ into the output directory
    #[arg(long)]
    no_static: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory and print the page tree
    Scan,
    /// Build the site: scan content, render every page, copy static assets
    Build(BuildArgs),
    /// Validate content without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let site = scan::scan(&cli.source)?;
            output::print_scan_output(&site);
        }
        Command::Build(args) => {
            println!("==> Scanning {}", cli.source.display());
            let site = scan::scan(&cli.source)?;
            output::print_scan_output(&site);

            println!("==> Rendering → {}", cli.output.display());
            let copy_static = site.config.copy_static && !args.no_static;
            render::render_site(&site, &cli.templates, &cli.output, copy_static)?;
            output::print_render_output(&site);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let site = scan::scan(&cli.source)?;
            output::print_scan_output(&site);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
