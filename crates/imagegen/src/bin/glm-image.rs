// ABOUTME: CLI binary for ChatGLM image generation.
// ABOUTME: Reads the API token from the environment, generates one image, and prints the saved path.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glm_imagegen::{
    print_token_setup_instructions, token_from_env, GenerateOptions, ImageClient,
    DEFAULT_API_BASE,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glm-image")]
#[command(about = "使用 ChatGLM API 生成图片")]
struct Args {
    /// 图片生成提示词
    prompt: String,

    /// 输出文件夹路径
    #[arg(default_value = "output")]
    output_dir: PathBuf,

    /// 图片尺寸
    #[arg(default_value = "1024x1024")]
    size: String,

    /// 图片质量
    #[arg(default_value = "standard")]
    quality: String,

    /// 模型名称
    #[arg(long, default_value = "cogView-4")]
    model: String,

    /// API 端点
    #[arg(long = "api-base", default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let token = match token_from_env() {
        Some(token) => token,
        None => {
            print_token_setup_instructions();
            return ExitCode::from(1);
        }
    };

    let client = ImageClient::builder()
        .api_base(args.api_base)
        .token(token)
        .build();
    let opts = GenerateOptions {
        prompt: args.prompt,
        output_dir: args.output_dir,
        size: args.size,
        quality: args.quality,
        model: args.model,
    };

    println!("正在生成图片: {}...", truncate(&opts.prompt, 50));
    match client.generate(&opts).await {
        Ok(path) => {
            println!("图片已保存至: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("发生错误: {}", e);
            ExitCode::from(1)
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
