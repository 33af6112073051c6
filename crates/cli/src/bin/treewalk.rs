use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // 環境変数でログレベルを設定可能にする
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // ログ初期化（stdoutはファイル一覧専用）
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    // CLIパース＆実行
    let cli = Cli::parse();
    cli.run()?;

    Ok(())
}
