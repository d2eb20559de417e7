//! menuify - render launcher menu grids and compile launcher projects.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use menuify::{compile, BorderStyle, CompileError, Grid, GridConfig, Project};

#[derive(Parser)]
#[command(name = "menuify")]
#[command(about = "Build platform launcher menus from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the bordered menu grid to stdout
    Render(RenderArgs),

    /// Compile a project into launcher scripts
    Compile {
        /// Project JSON file
        project: PathBuf,

        /// Output directory for scripts and manifest
        #[arg(short, long, default_value = "menuify-out")]
        out: PathBuf,
    },

    /// List the available border styles
    Styles,
}

#[derive(Args)]
struct RenderArgs {
    /// Grid config (TOML); flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport width (defaults to the console width)
    #[arg(long, requires = "height")]
    width: Option<u16>,

    /// Viewport height (defaults to the console height)
    #[arg(long, requires = "width")]
    height: Option<u16>,

    #[arg(long)]
    margin_left: Option<u16>,

    #[arg(long)]
    margin_right: Option<u16>,

    #[arg(long)]
    margin_top: Option<u16>,

    #[arg(long)]
    margin_bottom: Option<u16>,

    /// Border style name (see `menuify styles`)
    #[arg(short, long)]
    border: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render(&args),
        Commands::Compile { project, out } => compile_project(&project, &out),
        Commands::Styles => {
            for style in BorderStyle::ALL {
                let g = style.glyphs();
                println!(
                    "{:<12} {}{}{} {}",
                    style.name(),
                    g.top_left,
                    g.horizontal,
                    g.top_right,
                    g.vertical
                );
            }
            Ok(())
        }
    }
}

/// Build the grid from the config file, then apply flag overrides.
fn build_grid(args: &RenderArgs) -> Result<Grid> {
    let config = match &args.config {
        Some(path) => GridConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GridConfig::default(),
    };
    let mut grid = config.to_grid().context("invalid grid config")?;

    if let (Some(width), Some(height)) = (args.width, args.height) {
        grid.set_viewport(width, height);
    }
    if let Some(n) = args.margin_left {
        grid.margin_left(n);
    }
    if let Some(n) = args.margin_right {
        grid.margin_right(n);
    }
    if let Some(n) = args.margin_top {
        grid.margin_top(n);
    }
    if let Some(n) = args.margin_bottom {
        grid.margin_bottom(n);
    }
    if let Some(name) = &args.border {
        grid.uniform_border_named(name)?;
    }
    Ok(grid)
}

fn render(args: &RenderArgs) -> Result<()> {
    let buffer = build_grid(args)?.invoke_render().context("render failed")?;

    let mut stdout = io::stdout().lock();
    for (i, line) in buffer.into_iter().enumerate() {
        if i > 0 {
            stdout.write_all(b"\n")?;
        }
        stdout.write_all(line.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

/// Attach the user-facing error code to a compile failure.
fn with_code(err: CompileError, path: &Path) -> anyhow::Error {
    let code = err.code();
    anyhow::Error::new(err).context(format!("failed to compile {} (code {code})", path.display()))
}

fn compile_project(path: &Path, out: &Path) -> Result<()> {
    let project = Project::load(path).map_err(|e| with_code(e, path))?;
    let compiled = compile(&project, out).map_err(|e| with_code(e, path))?;

    for binding in &compiled.bindings {
        match &binding.location {
            Some(location) => println!("{} -> {}", binding.button_id, location.display()),
            None => println!("{}", binding.button_id),
        }
    }
    info!("compiled {} into {}", project.id, out.display());
    println!("Project compiled successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuify::{Margins, Viewport};
    use std::fs;

    fn render_args(argv: &[&str]) -> RenderArgs {
        let cli = Cli::try_parse_from(["menuify", "render"].iter().chain(argv).copied()).unwrap();
        match cli.command {
            Commands::Render(args) => args,
            _ => panic!("expected render"),
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("menuify-cli-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_flags_build_grid() {
        let args = render_args(&[
            "--width", "80", "--height", "24", "--margin-left", "5", "--border", "double",
        ]);
        let grid = build_grid(&args).unwrap();
        assert_eq!(grid.viewport(), Some(Viewport::new(80, 24)));
        assert_eq!(grid.margins().left, 5);
        assert_eq!(grid.border(), Some(BorderStyle::Double));
    }

    #[test]
    fn test_width_requires_height() {
        let result = Cli::try_parse_from(["menuify", "render", "--width", "80"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let dir = scratch_dir("override");
        let config = dir.join("grid.toml");
        fs::write(
            &config,
            "border = \"rounded\"\n\n[viewport]\nwidth = 40\nheight = 10\n\n\
             [margins]\nleft = 1\nright = 2\ntop = 3\nbottom = 4\n",
        )
        .unwrap();
        let path = config.to_str().unwrap();

        let grid = build_grid(&render_args(&["--config", path])).unwrap();
        assert_eq!(grid.viewport(), Some(Viewport::new(40, 10)));
        assert_eq!(grid.border(), Some(BorderStyle::Rounded));

        let grid = build_grid(&render_args(&[
            "--config", path, "--width", "60", "--height", "12", "--margin-top", "0",
            "--border", "ascii",
        ]))
        .unwrap();
        assert_eq!(grid.viewport(), Some(Viewport::new(60, 12)));
        assert_eq!(
            grid.margins(),
            Margins {
                left: 1,
                right: 2,
                top: 0,
                bottom: 4,
            }
        );
        assert_eq!(grid.border(), Some(BorderStyle::Ascii));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unknown_border_flag() {
        let args = render_args(&["--width", "10", "--height", "4", "--border", "wavy"]);
        let err = build_grid(&args).unwrap_err();
        assert!(err.to_string().contains("wavy"));
    }

    #[test]
    fn test_missing_config_has_context() {
        let err = build_grid(&render_args(&["--config", "/nonexistent/menuify.toml"])).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load config"));
    }

    #[test]
    fn test_compile_error_keeps_code() {
        let dir = scratch_dir("compile");
        let project = dir.join("project.json");
        fs::write(&project, r#"{"id": "empty"}"#).unwrap();

        let err = compile_project(&project, &dir.join("out")).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("code 1302"), "{message}");
        assert!(matches!(
            err.downcast_ref::<CompileError>(),
            Some(CompileError::NoButtons { .. })
        ));

        fs::remove_dir_all(&dir).unwrap();
    }
}
