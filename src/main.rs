use std::{error::Error, fs};

use clap::Parser;
use parametra::interpreter::{
    evaluator::{
        core::Evaluator,
        handler::{Handler, HandlerTable},
    },
    grammar::FORMULA_GRAMMAR,
};
use tracing::Level;

/// parametra evaluates unit-aware formulas such as `2 * 15mm + 1cm` the way a
/// parametric modeler does for its dimensions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the formula from this file instead of the command line.
    #[arg(short, long, conflicts_with = "formula")]
    file: Option<String>,

    /// Defines a named constant as `name=formula`. Definitions are solved in
    /// order and each one can use the ones before it.
    #[arg(short, long, value_name = "NAME=FORMULA")]
    define: Vec<String>,

    /// Prints the fully parenthesised parse tree instead of the value.
    #[arg(short, long)]
    tree: bool,

    /// Logs how the formula is parsed and solved.
    #[arg(short, long)]
    verbose: bool,

    /// The formula to solve.
    #[arg(required_unless_present = "file")]
    formula: Option<String>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
                             .with_writer(std::io::stderr)
                             .init();

    let formula = match (&args.file, &args.formula) {
        (Some(path), _) => fs::read_to_string(path).unwrap_or_else(|_| {
                                                       eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                                       std::process::exit(1);
                                                   }),
        (None, Some(formula)) => formula.clone(),
        (None, None) => String::new(),
    };

    match run(&args, &formula) {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Registers the definitions, then parses or solves the formula.
///
/// # Returns
/// The text to print, or `None` for an empty formula.
fn run(args: &Args, formula: &str) -> Result<Option<String>, Box<dyn Error>> {
    let mut handlers = HandlerTable::standard();

    for definition in &args.define {
        let (name, text) =
            definition.split_once('=')
                      .ok_or_else(|| format!("Definition '{definition}' must have the form name=formula."))?;
        let name = name.trim();
        if handlers.constant(name).is_some() {
            tracing::warn!(name, "definition is shadowed by an earlier constant");
        }
        let value = Evaluator::new(&FORMULA_GRAMMAR, &handlers)
            .solve(text)?
            .ok_or_else(|| format!("Definition of '{name}' is empty."))?;

        tracing::debug!(name, %value, "defined constant");
        handlers.register(Handler::constant(name.to_string(), value));
    }

    let evaluator = Evaluator::new(&FORMULA_GRAMMAR, &handlers);

    if args.tree {
        Ok(evaluator.parse(formula)?.map(|tree| tree.to_string()))
    } else {
        Ok(evaluator.solve(formula)?.map(|value| value.to_string()))
    }
}
