use clap::{Parser, Subcommand};
use sealbox::{prelude::*, pw};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sealbox", version, about = "Seal payloads with a password")]
struct Cli {
    #[command(subcommand)]
    command: SealboxCommand,

    /// Read the password from this flag instead of prompting. Prefer the
    /// prompt; flags leak into shell history.
    #[arg(long, global = true)]
    password: Option<String>,
}

#[derive(Subcommand)]
enum SealboxCommand {
    /// Seal a file or a string of text into a container.
    Seal {
        /// File to seal (text, an image, anything that fits in memory).
        file: Option<PathBuf>,
        /// Seal this text instead of a file.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Write the raw container here; without it the container is
        /// printed as base64 on stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Open a container back into its payload.
    Open {
        /// Raw container file to open.
        file: Option<PathBuf>,
        /// Open a base64-carried container instead of a file.
        #[arg(long, conflicts_with = "file")]
        base64: Option<String>,
        /// Write the payload here; without it the payload is printed to
        /// stdout (it must be UTF-8 text in that case).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    sealbox::logging::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("sealbox: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let password = match cli.password {
        Some(flag) => flag,
        None => rpassword::prompt_password("Password: ").map_err(|e| e.to_string())?,
    };

    match cli.command {
        SealboxCommand::Seal { file, text, output } => {
            let payload = match (&file, text) {
                (Some(path), None) => fs::read(path).map_err(|e| e.to_string())?,
                (None, Some(text)) => text.into_bytes(),
                _ => return Err("give a file or --text to seal".into()),
            };

            let mut workflow = Workflow::new();
            workflow.select_payload(payload);
            let container = workflow
                .run(Direction::Seal, pw!(password))
                .map_err(|e| e.to_string())?;

            match output {
                Some(path) => fs::write(path, container).map_err(|e| e.to_string())?,
                None => {
                    let encoded = Container::decode(container)
                        .map_err(|e| e.to_string())?
                        .encode_base64();
                    println!("{}", encoded);
                }
            }
        }
        SealboxCommand::Open {
            file,
            base64,
            output,
        } => {
            let container = match (&file, base64) {
                (Some(path), None) => fs::read(path).map_err(|e| e.to_string())?,
                (None, Some(text)) => Container::decode_base64(&text)
                    .map_err(|e| e.to_string())?
                    .encode(),
                _ => return Err("give a file or --base64 to open".into()),
            };

            let mut workflow = Workflow::new();
            workflow.select_payload(container);
            let plaintext = workflow
                .run(Direction::Open, pw!(password))
                .map_err(|e| e.to_string())?;

            match output {
                Some(path) => fs::write(path, plaintext).map_err(|e| e.to_string())?,
                None => {
                    // The container doesn't remember what the payload was;
                    // printing only makes sense for text.
                    match std::str::from_utf8(plaintext) {
                        Ok(text) => println!("{}", text),
                        Err(_) => {
                            return Err("payload is not text, use --output to write it".into());
                        }
                    }
                }
            }
        }
    }

    io::stdout().flush().map_err(|e| e.to_string())?;
    Ok(())
}
