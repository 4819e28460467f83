use anyhow::{bail, Context};
use humanyze::models::{HumanizeSource, HumanizedResult, ScoreReport};
use humanyze::services::config_store::ConfigStore;
use humanyze::services::detector::score;
use humanyze::services::humanizer::humanize_fallback;
use humanyze::services::remote::HumanizerClient;
use humanyze::services::text_processor::normalize_punctuation;
use serde::Serialize;

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn print_report(report: &ScoreReport) {
    println!("AI score:     {:>3}", report.ai_score);
    println!("Human score:  {:>3}", report.human_score);
    println!("  formal language:      {:>3}", report.analysis.formal_language);
    println!("  repetitive patterns:  {:>3}", report.analysis.repetitive_patterns);
    println!("  sentence uniformity:  {:>3}", report.analysis.sentence_uniformity);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  humanize_text <path.txt> [--text <inline text>] [--humanize] [--offline] [--api <base_url>] [--out <json_path>]\n\nNotes:\n  - Scores the input and prints the report.\n  - `--humanize` also rewrites the text via the remote service, falling back to the local transform when unreachable.\n  - `--offline` skips the remote call and uses the local transform directly."
        );
        return Ok(());
    }

    humanyze::init_logging();

    let inline_text = parse_arg_value(&args, "--text");
    let do_humanize = has_flag(&args, "--humanize");
    let offline = has_flag(&args, "--offline");
    let api_url = parse_arg_value(&args, "--api");
    let out_path = parse_arg_value(&args, "--out");

    let (source_name, raw) = match inline_text {
        Some(text) => ("(inline)".to_string(), text),
        None => {
            let path = args[1].clone();
            if path.starts_with("--") {
                bail!("missing input: pass a file path or --text");
            }
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("read file failed: {}", path))?;
            (path, content)
        }
    };

    let text = normalize_punctuation(&raw);
    if text.is_empty() {
        bail!("input is empty after normalization");
    }

    println!("Input: {} ({} chars)", source_name, text.chars().count());
    println!();

    let report = score(&text);
    print_report(&report);

    let mut humanized: Option<HumanizedResult> = None;
    if do_humanize {
        let result = if offline {
            HumanizedResult {
                original_text: text.clone(),
                humanized_text: humanize_fallback(&text),
                source: HumanizeSource::LocalFallback,
            }
        } else {
            let config = ConfigStore::default_config_dir()
                .map(ConfigStore::new)
                .and_then(|store| store.load().ok())
                .unwrap_or_default();
            let mut client = HumanizerClient::new(&config);
            if let Some(ref url) = api_url {
                client.set_base_url(url);
            }
            client.humanize(&text).await?
        };

        println!();
        let source = match result.source {
            HumanizeSource::Remote => "remote",
            HumanizeSource::LocalFallback => "local fallback",
        };
        println!("Humanized ({}):", source);
        println!("{}", preview(&result.humanized_text, 2000));
        println!();
        println!("Rewritten score:");
        print_report(&score(&result.humanized_text));
        humanized = Some(result);
    }

    if let Some(out_path) = out_path {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Output {
            input: String,
            chars: usize,
            report: ScoreReport,
            #[serde(skip_serializing_if = "Option::is_none")]
            humanized: Option<HumanizedResult>,
        }

        let out = Output {
            input: source_name,
            chars: text.chars().count(),
            report,
            humanized,
        };

        let json = serde_json::to_string_pretty(&out).context("serialize output")?;
        std::fs::write(&out_path, json)
            .with_context(|| format!("write out failed: {}", out_path))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
