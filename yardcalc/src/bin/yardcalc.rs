use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "yardcalc", about = "Evaluate single-line arithmetic expressions")]
struct Options {
    /// Also print the postfix form of the expression.
    #[structopt(long)]
    rpn: bool,

    /// Raise log verbosity, repeat for more. RUST_LOG overrides it.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// History file for the interactive prompt, defaults to ~/.yardcalc_history
    #[structopt(long, parse(from_os_str))]
    history: Option<PathBuf>,

    /// Expression to evaluate. Without one, a line is read from stdin.
    #[structopt(allow_hyphen_values = true)]
    expr: Vec<String>,
}

fn init_logger(verbose: u8) {
    use log::LevelFilter;
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

mod repl {
    use anyhow::{anyhow, Result};
    use log::{debug, info};
    use rustyline::error::ReadlineError;
    use yardcalc::{rpneval, Error, ShuntingParser};

    pub fn evalexpr(input: &str, show_rpn: bool) -> Result<()> {
        println!("{}", yardcalc::eval_line(input, show_rpn)?);
        Ok(())
    }

    fn print_line(input: &str, show_rpn: bool) {
        match ShuntingParser::parse_str(input) {
            Err(e) => println!("{}", e),
            Ok(rpn) => match rpneval::eval(&rpn) {
                Err(e) => println!("{}", Error::from(e)),
                Ok(result) if show_rpn => println!("{} = {}", rpn, result),
                Ok(result) => println!("{}", result),
            },
        }
    }

    pub fn run(histpath: Option<std::path::PathBuf>, show_rpn: bool) -> Result<()> {
        let mut rl = rustyline::DefaultEditor::new()
            .map_err(|e| anyhow!("Readline err: {:?}", e))?;
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                info!("No history yet at {}", path.display());
            }
        }
        loop {
            match rl.readline(">> ") {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(anyhow!("Readline err: {:?}", e)),
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        debug!("history entry not added: {:?}", e);
                    }
                    print_line(&line, show_rpn);
                }
            }
        }
        if let Some(path) = &histpath {
            rl.save_history(path)
                .map_err(|e| anyhow!("saving history to {}: {:?}", path.display(), e))?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let options = Options::from_args();
    init_logger(options.verbose);

    if !options.expr.is_empty() {
        let input = options.expr.join(" ");
        return repl::evalexpr(&input, options.rpn);
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut line = String::new();
        stdin.read_line(&mut line).context("reading expression from stdin")?;
        return repl::evalexpr(&line, options.rpn);
    }

    let histpath = options
        .history
        .or_else(|| dirs::home_dir().map(|home| home.join(".yardcalc_history")));
    repl::run(histpath, options.rpn)
}
