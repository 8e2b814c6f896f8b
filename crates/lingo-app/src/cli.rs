use std::path::PathBuf;

use clap::Parser;

/// Authentic expressions in the language you are learning
#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Profile to load from the profiles folder
    #[arg(short = 'p', long, default_value = "main")]
    pub profile: String,

    /// Create a profile cloned from main and exit
    #[arg(long, value_name = "NAME")]
    pub new_profile: Option<String>,

    /// Native language, by name or code (e.g. "Chinese (Simplified)", zh)
    #[arg(long, value_name = "LANG")]
    pub native: Option<String>,

    /// Language to learn, by name or code
    #[arg(long, value_name = "LANG")]
    pub target: Option<String>,

    /// Where settings and the notebook are stored
    #[arg(long, env = "LINGO_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Skip illustration requests
    #[arg(long)]
    pub no_images: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Look this up once and exit instead of starting a session
    pub query: Vec<String>,
}

impl Cli {
    pub fn one_shot_query(&self) -> Option<String> {
        let query = self.query.join(" ");
        (!query.trim().is_empty()).then_some(query)
    }
}
