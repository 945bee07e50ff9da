use clap::Parser;

#[derive(Parser)]
#[command(name = "postboard")]
#[command(about = "Browse employees, their posts and comments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// API base URL (defaults to POSTBOARD_API_URL, then the built-in demo API)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Cap the number of posts shown per employee
    #[arg(long)]
    pub limit: Option<usize>,
}
