//! Optimize command - one-shot rewrite of draft text

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::PathBuf;
use tweet_composer_domain::{policy::LengthPolicy, usecases::OptimizeUseCase};

use crate::args::OptimizeArgs;
use crate::config::AppConfig;
use crate::providers::build_optimizer;

pub async fn execute(args: OptimizeArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let text = get_input_text(&args)?;

    if text.trim().is_empty() {
        anyhow::bail!("No text provided for optimization");
    }

    let optimizer = build_optimizer(&config)?;
    let policy = LengthPolicy::new(config.llm.max_chars);
    let usecase = OptimizeUseCase::new(optimizer, policy);

    let output = usecase
        .optimize(&text)
        .await
        .context("Optimization failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        let length = output.optimized_text.chars().count();
        println!("{}", output.optimized_text);
        println!();
        match policy.check(&output.optimized_text) {
            Ok(()) => println!("({} / {} characters)", length, policy.max_chars),
            Err(exceeded) => println!("(warning: {})", exceeded),
        }
    }

    Ok(())
}

fn get_input_text(args: &OptimizeArgs) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }

    if let Some(ref file) = args.file {
        if file.as_os_str() == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            return Ok(buffer);
        }

        return std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read file: {}", file.display()));
    }

    anyhow::bail!("Provide --text or --file")
}
