use annotext::application::init::init;
use annotext::application::{
    display_tags, normalize_tags, AnnotateService, ConfigService, IndexService,
};
use annotext::cli::{
    format_extraction, format_index_report, format_segments, format_tag_list, Cli, Commands,
};
use annotext::domain::tags::normalize_all;
use annotext::domain::RenderFormat;
use annotext::error::AnnotextError;
use annotext::infrastructure::{read_input, FileSystemWorkspace};
use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("annotext=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("annotext=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), AnnotextError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized annotext workspace at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let workspace = FileSystemWorkspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("tag_route = {}", config.tag_route);
                println!("profile_route = {}", config.profile_route);
                println!("extensions = {}", config.extensions.join(","));
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: annotext config [--list | <key> [<value>]]");
                println!("Valid keys: tag_route, profile_route, extensions, created");
            }
            Ok(())
        }
        Commands::Normalize {
            tags,
            strict,
            unique,
        } => {
            let slugs = if unique {
                normalize_all(&tags)
            } else {
                normalize_tags(&tags, strict)?
            };
            print!("{}", format_tag_list(&slugs));
            Ok(())
        }
        Commands::Display { tags } => {
            print!("{}", format_tag_list(&display_tags(&tags)));
            Ok(())
        }
        Commands::Extract { file, json } => {
            let text = read_input(file.as_deref())?;
            let result = AnnotateService::from_environment()?.extract(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", format_extraction(&result).trim_end());
            }
            Ok(())
        }
        Commands::Segment { file, json } => {
            let text = read_input(file.as_deref())?;
            let segments = AnnotateService::from_environment()?.segment(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&segments)?);
            } else {
                print!("{}", format_segments(&segments));
            }
            Ok(())
        }
        Commands::Render { file, format } => {
            let format = RenderFormat::from_str(&format).map_err(AnnotextError::Config)?;
            let text = read_input(file.as_deref())?;
            let service = AnnotateService::from_environment()?;
            print!("{}", service.render(&text, format));
            Ok(())
        }
        Commands::Index { json } => {
            let workspace = FileSystemWorkspace::discover()?;
            let report = IndexService::new(workspace).execute()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", format_index_report(&report));
            }
            Ok(())
        }
    }
}
