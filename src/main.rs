use avl_collections::avl_tree::AvlSet;
use avl_collections::tree_printer::Result;
use log::{error, LevelFilter};
use simplelog::{ColorChoice, Config, SimpleLogger, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::process;

fn run<W>(out: &mut W) -> Result<()>
where
    W: Write,
{
    let mut set = AvlSet::new();

    for value in &[10, 20, 30, 40, 50, 25] {
        set.insert(*value);
    }

    set.print(out)?;

    writeln!(out, "Contains 30: {}", if set.contains(&30) { "Yes" } else { "No" })?;
    writeln!(out, "Contains 35: {}", if set.contains(&35) { "Yes" } else { "No" })?;

    set.remove(&30);
    writeln!(out, "\nAfter removing 30:")?;
    set.print(out)?;

    Ok(())
}

fn main() {
    let logger = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if logger.is_err() {
        if let Err(err) = SimpleLogger::init(LevelFilter::Warn, Config::default()) {
            eprintln!("failed to initialize logger: {}", err);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&mut out) {
        error!("failed to write to stdout: {}", err);
        process::exit(1);
    }
}
