use clap::{Parser, Subcommand};
use std::{
    fs,
    path::Path,
    process::{self, Command},
};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run a demo from `demos/`
    Run {
        demo: String,
        #[arg(long, value_parser, num_args = 0..)]
        features: Vec<String>,
        /// Log filter passed through as `RUST_LOG`
        #[arg(long)]
        log: Option<String>,
    },
    /// List the available demos
    List,
}

impl Cmd {
    fn run(&self) {
        match self {
            Cmd::Run {
                demo,
                features,
                log,
            } => run_demo(demo, features, log.as_deref()),
            Cmd::List => {
                for demo in demos() {
                    println!("{demo}");
                }
            }
        }
    }
}

fn demos() -> Vec<String> {
    let Ok(entries) = fs::read_dir("demos") else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().join("Cargo.toml").exists())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

fn run_demo(demo: &str, features: &[String], log: Option<&str>) {
    let dir = format!("demos/{}", demo);
    if !Path::new(&dir).join("Cargo.toml").exists() {
        eprintln!("unknown demo `{demo}`, try one of: {}", demos().join(", "));
        process::exit(2);
    }

    let mut cmd = Command::new("cargo");
    cmd.arg("run").current_dir(&dir);

    if !features.is_empty() {
        let prefixed = features
            .iter()
            .map(|f| format!("egor_animator/{}", f))
            .collect::<Vec<_>>();
        cmd.arg("--features").arg(prefixed.join(","));
    }
    if let Some(filter) = log {
        cmd.env("RUST_LOG", filter);
    }

    println!("> {:?}", cmd);
    let status = cmd.status().expect("failed to spawn command");

    if !status.success() {
        process::exit(status.code().unwrap_or(1));
    }
}

fn main() {
    Cli::parse().cmd.run();
}
