use clap::{Parser, Subcommand};
use dualcalc::interpret;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate an arithmetic expression
  Eval {
    /// The expression to evaluate
    expression: String,
  },
}

fn main() {
  let cli = Cli::parse();

  match cli.command {
    Commands::Eval { expression } => match interpret(&expression) {
      Ok(result) => println!("{result}"),
      Err(e) => eprintln!("Error: {}", e),
    },
  }
}
