mod args;
mod diagram;
mod render;
mod viewer;

use anyhow::{Context, Result};
use lessonmark_config::Config;
use lessonmark_engine::{
    Disclosure, RecoveryResult, parse, recover_exercises_str, recover_str, render_diagrams,
};
use serde_json::json;
use std::{
    env, fs,
    io::{self, Read},
    process,
};

use args::{Mode, Options, usage};
use diagram::TextDiagramRenderer;
use render::{RenderSettings, plain_lines, render};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("lessonmark");

    let opts = match Options::parse(&args[1..]) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            process::exit(2);
        }
    };
    if opts.help {
        println!("{}", usage(program));
        return Ok(());
    }

    let config = match Config::load_or_default(opts.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    log::debug!("Using config: {config:?}");

    let input = read_input(&opts.input)?;
    let recovered = if opts.raw {
        RecoveryResult {
            markdown: input.clone(),
            trail: vec![],
        }
    } else {
        let recovered = recover_str(&input);
        log::info!("Recovered lesson via {:?}", recovered.strategy());
        recovered
    };
    let exercises = if opts.raw {
        vec![]
    } else {
        recover_exercises_str(&input)
    };

    let doc = parse(recovered.markdown.as_str());
    let diagrams = render_diagrams(&doc, &TextDiagramRenderer);
    let settings = RenderSettings::from_config(&config, opts.all);

    match opts.mode {
        Mode::Plain => {
            let rendered = render(&doc, &recovered.markdown, &settings, &diagrams);
            for line in plain_lines(&rendered) {
                println!("{line}");
            }
            if !exercises.is_empty() {
                println!();
                println!("[{} exercises]", exercises.len());
            }
        }
        Mode::Json => {
            let disclosure = if opts.all {
                Disclosure::Full
            } else {
                settings
                    .disclosure
                    .decide_for_input(&doc, &recovered.markdown)
            };
            let failed_diagrams: Vec<usize> = diagrams
                .iter()
                .filter(|d| d.is_failed())
                .map(|d| d.block_index)
                .collect();
            let out = json!({
                "trail": recovered.trail,
                "markdown": recovered.markdown,
                "blocks": doc.blocks,
                "toc": settings.toc.build(&doc).map(|toc| toc.entries),
                "disclosure": disclosure,
                "failed_diagrams": failed_diagrams,
                "exercises": exercises,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Mode::View => {
            let title = if opts.input == "-" {
                "stdin".to_string()
            } else {
                opts.input.clone()
            };
            viewer::run(
                viewer::Lesson {
                    title,
                    doc: &doc,
                    input: &recovered.markdown,
                    diagrams: &diagrams,
                },
                settings,
            )?;
        }
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read '{input}'"))
    }
}
