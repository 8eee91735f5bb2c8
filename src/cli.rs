// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write as _;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::{ApiClient, JobTailorApi};
use crate::clipboard::SystemClipboard;
use crate::config::ClientConfig;
use crate::controller;
use crate::download;
use crate::render;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "retailor")]
#[command(about = "Tailor a resume against a job posting via the tailoring API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Override the API base URL from the config
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum CliCommand {
    /// Tailor a resume file against a job description and/or posting URL
    Tailor {
        /// Resume text file
        #[arg(long)]
        resume: PathBuf,
        /// Job description text file
        #[arg(long)]
        job_desc: Option<PathBuf>,
        /// Job posting URL
        #[arg(long)]
        job_url: Option<String>,
        /// Also save the tailored resume here
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Extract a job description from a posting URL
    Scrape {
        #[arg(long)]
        job_url: String,
    },
    /// Check that the backend is reachable
    Health,
    /// Interactive session
    Session,
}

pub async fn run(cli: Cli, config: ClientConfig) -> Result<()> {
    let api = ApiClient::new(config.api_base_url.clone())?;

    match cli.command {
        CliCommand::Tailor {
            resume,
            job_desc,
            job_url,
            output,
        } => {
            let mut session = Session::new();
            session.resume = read_input_file(&resume).await?;
            if let Some(path) = job_desc {
                session.job_desc = read_input_file(&path).await?;
            }
            if let Some(url) = job_url {
                session.job_url = url;
            }

            controller::tailor_resume(&api, &mut session).await;
            print!("{}", render::render_session(&session));

            if session.display().error().is_some() {
                std::process::exit(1);
            }
            if let Some(path) = output {
                controller::download_result(&mut session, &path).await;
                print!("{}", render::render_session(&session));
            }
            Ok(())
        }

        CliCommand::Scrape { job_url } => {
            let mut session = Session::new();
            session.job_url = job_url;

            controller::extract_job_description(&api, &mut session).await;
            if session.display().error().is_some() {
                print!("{}", render::render_session(&session));
                std::process::exit(1);
            }
            println!("{}", session.job_desc);
            Ok(())
        }

        CliCommand::Health => {
            let mut session = Session::new();
            if controller::startup_health_check(&api, &mut session).await {
                println!("Backend is reachable at {}", api.base_url());
            } else {
                print!("{}", render::render_session(&session));
                std::process::exit(1);
            }
            Ok(())
        }

        CliCommand::Session => run_session(&api, &config).await,
    }
}

/// Interactive loop: each command is one user action against the shared
/// session. Actions are awaited to completion before the next prompt, so no
/// two network calls are ever in flight at once.
async fn run_session<A>(api: &A, config: &ClientConfig) -> Result<()>
where
    A: JobTailorApi + Sync,
{
    let mut session = Session::new();
    let mut clipboard = SystemClipboard;

    controller::startup_health_check(api, &mut session).await;
    print!("{}", render::render_session(&session));
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "resume" => session.resume = read_input_file(&PathBuf::from(rest)).await?,
            "jobdesc" => session.job_desc = read_input_file(&PathBuf::from(rest)).await?,
            "url" => session.job_url = rest.to_string(),
            "scrape" => controller::extract_job_description(api, &mut session).await,
            "tailor" => controller::tailor_resume(api, &mut session).await,
            "copy" => controller::copy_result(&mut clipboard, &mut session),
            "download" => {
                let path = if rest.is_empty() {
                    download::timestamped_download_path(&config.download_dir)
                } else {
                    PathBuf::from(rest)
                };
                controller::download_result(&mut session, &path).await;
            }
            "clear" => controller::clear_all(&mut session),
            "show" => {}
            "help" => {
                println!("Commands:");
                println!("  resume <file>     load the resume text");
                println!("  jobdesc <file>    load the job description text");
                println!("  url <job-url>     set the job posting URL");
                println!("  scrape            extract the job description from the URL");
                println!("  tailor            tailor the resume");
                println!("  copy              copy the tailored resume to the clipboard");
                println!("  download [file]   save the tailored resume as plain text");
                println!("  clear             reset all inputs");
                println!("  show              re-render the current state");
                println!("  quit              exit");
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        }

        print!("{}", render::render_session(&session));
    }

    Ok(())
}

async fn read_input_file(path: &PathBuf) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
