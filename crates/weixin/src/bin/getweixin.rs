// ABOUTME: CLI binary for the WeChat article extractor.
// ABOUTME: Fetches article URLs (or parses saved HTML) and prints the five-line record or JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use weixin_extract::{Article, Client, ExtractError};

#[derive(Parser, Debug)]
#[command(name = "getweixin")]
#[command(about = "微信公众号文章内容提取工具")]
struct Args {
    /// Output as JSON instead of the five labeled lines
    #[arg(long = "json")]
    json_output: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Saved HTML file to parse offline (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// URL context for HTML file parsing (required with --html)
    #[arg(long = "url")]
    url: Option<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,

    /// Article URLs to fetch
    #[arg()]
    urls: Vec<String>,
}

/// Print the diagnostic for a failed extraction, distinguishing a non-200
/// status (with the numeric code) from a transport/request fault.
fn report_error(err: &ExtractError) {
    if let Some(code) = err.status_code() {
        eprintln!("请求失败，状态码：{}", code);
    } else {
        eprintln!("获取文章内容失败：{}", err);
    }
}

fn format_output(articles: &[Article], json_output: bool) -> String {
    if json_output {
        if articles.len() == 1 {
            serde_json::to_string_pretty(&articles[0]).unwrap()
        } else {
            serde_json::to_string_pretty(articles).unwrap()
        }
    } else {
        articles
            .iter()
            .map(Article::format_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.html.is_some() && args.url.is_none() {
        eprintln!("error: --url is required when using --html");
        return ExitCode::from(1);
    }

    if args.html.is_none() && args.urls.is_empty() {
        eprintln!("error: at least one URL is required, or use --html with --url");
        return ExitCode::from(1);
    }

    if args.html.is_some() && !args.urls.is_empty() {
        eprintln!("error: cannot use both --html and positional URLs");
        return ExitCode::from(1);
    }

    let client = Client::builder()
        .allow_private_networks(args.allow_private_networks)
        .build();

    let start = Instant::now();
    let mut articles: Vec<Article> = Vec::new();
    let mut had_error = false;

    if let Some(html_path) = &args.html {
        let url = args.url.as_ref().unwrap();
        match fs::read_to_string(html_path) {
            Ok(html_content) => {
                articles.push(client.parse_html(&html_content, url));
            }
            Err(e) => {
                eprintln!("error reading file {:?}: {}", html_path, e);
                had_error = true;
            }
        }
    } else {
        for url in &args.urls {
            match client.parse(url).await {
                Ok(article) => articles.push(article),
                Err(e) => {
                    report_error(&e);
                    had_error = true;
                }
            }
        }
    }

    let elapsed = start.elapsed();

    if !articles.is_empty() {
        let output_str = format_output(&articles, args.json_output);

        if let Some(output_path) = &args.output {
            if let Err(e) = fs::write(output_path, &output_str) {
                eprintln!("error writing to {:?}: {}", output_path, e);
                had_error = true;
            }
        } else {
            println!("{}", output_str);
        }
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
