use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use ccgchart::{Conversion, Converter, Dialect, Dictionary, NodeLabel};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type Err = Box<dyn std::error::Error + 'static>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Output {
  /// Print the derivation chart of each tree
  Derivation,
  /// Print each tree's gold supertagged sentence
  Sentence,
  /// Print each labeled tree
  Tree,
}

/// Convert a CCG treebank file into derivation charts or supertagged sentences
#[derive(Debug, Parser)]
#[command(name = "cli")]
struct Args {
  /// Treebank file, one tree per line
  file: PathBuf,

  /// Treebank dialect: japanese or simple
  #[arg(short, long)]
  dialect: Dialect,

  /// What to print for each tree
  #[arg(short, long, value_enum, default_value_t = Output::Derivation)]
  output: Output,

  /// Report trees that fail to convert and carry on with the rest
  #[arg(short, long)]
  keep_going: bool,
}

fn render_tree(conversion: &Conversion, dict: &Dictionary) -> String {
  let rendered = conversion.tree.map(&mut |label: &NodeLabel| match label {
    NodeLabel::Terminal(t) => format!(
      "{} {}",
      dict.category(t.category()).unwrap_or("?"),
      dict.word(t.word()).unwrap_or("?")
    ),
    NodeLabel::Nonterminal(n) => {
      let category = dict.category(n.category).unwrap_or("?");
      if n.rule_type.is_empty() {
        category.to_string()
      } else {
        format!("{} {}", n.rule_type, category)
      }
    }
  });
  rendered.to_string()
}

fn print(
  out: &mut impl Write,
  output: Output,
  line: usize,
  conversion: &Conversion,
  dict: &Dictionary,
) -> io::Result<()> {
  match output {
    Output::Derivation => {
      writeln!(out, "# line {}", line)?;
      write!(out, "{}", conversion.derivation.display(dict))
    }
    Output::Sentence => writeln!(out, "{}", conversion.sentence.render(dict)),
    Output::Tree => writeln!(out, "{}\n", render_tree(conversion, dict)),
  }
}

fn run(args: &Args) -> Result<(), Err> {
  let document = fs::read_to_string(&args.file)?;
  let mut converter = Converter::new(args.dialect);

  let mut converted = Vec::new();
  let mut failed = 0;
  for (line, result) in converter.convert_document(&document) {
    match result {
      Ok(conversion) => converted.push((line, conversion)),
      Err(err) if args.keep_going => {
        warn!(line, %err, "skipping tree");
        failed += 1;
      }
      Err(err) => return Err(format!("{}:{}: {}", args.file.display(), line, err).into()),
    }
  }

  let dict = converter.dictionary();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  for (line, conversion) in converted.iter() {
    print(&mut out, args.output, *line, conversion, dict)?;
  }
  out.flush()?;

  info!(
    trees = converted.len(),
    failed,
    categories = dict.num_categories(),
    words = dict.num_words(),
    "done"
  );
  Ok(())
}

fn main() {
  tracing_subscriber::registry()
    .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let args = Args::parse();
  if let Err(err) = run(&args) {
    eprintln!("error: {}", err);
    process::exit(1);
  }
}
