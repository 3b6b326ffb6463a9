#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "netdoc", about = ".NET Remoting binary stream inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Dump {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
	Info {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> netdoc::nrbf::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Dump { path, json } => cmd::dump::run(path, json),
		Commands::Info { path, json } => cmd::info::run(path, json),
	}
}
