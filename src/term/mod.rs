extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use rap::lang::{Column, Error, ErrorKind};
use rap::mach::{compile, Routine, Runtime, Val};
use std::fs::File;
use std::io::{BufRead, BufReader, IsTerminal, Write};

#[derive(Debug, Default)]
struct Options {
    trace: bool,
    listing: bool,
    file: Option<String>,
}

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> Result<Options, String> {
        let mut options = Options::default();
        for arg in args {
            match arg.as_str() {
                "--trace" => options.trace = true,
                "--listing" => options.listing = true,
                s if s.starts_with("--") => return Err(format!("unknown option {}", s)),
                _ if options.file.is_some() => return Err("more than one file".to_string()),
                _ => options.file = Some(arg.clone()),
            }
        }
        Ok(options)
    }
}

pub fn main() {
    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("usage: rap [--trace] [--listing] [FILE]");
            std::process::exit(2);
        }
    };
    if let Err(error) = main_loop(&options) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn main_loop(options: &Options) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    runtime.set_trace(options.trace);
    if let Some(filename) = &options.file {
        let reader = BufReader::new(File::open(filename)?);
        return batch(options, &mut runtime, reader);
    }
    if !std::io::stdin().is_terminal() {
        let stdin = std::io::stdin();
        return batch(options, &mut runtime, stdin.lock());
    }
    let interface = Interface::new("rap")?;
    interface.set_prompt("> ")?;
    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !string.trim().is_empty() {
            interface.add_history_unique(string.clone());
        }
        let mut out = std::io::stdout();
        enter(options, &mut runtime, &string, &mut out)?;
    }
    Ok(())
}

fn batch(options: &Options, runtime: &mut Runtime, reader: impl BufRead) -> std::io::Result<()> {
    let mut out = std::io::stdout();
    for line in reader.lines() {
        enter(options, runtime, &line?, &mut out)?;
    }
    Ok(())
}

/// Compile and execute one line, reporting errors without giving up.
fn enter(
    options: &Options,
    runtime: &mut Runtime,
    line: &str,
    out: &mut impl Write,
) -> std::io::Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }
    writeln!(out, "Source: {}", line)?;
    let program = match compile(line) {
        Ok(program) => program,
        Err(error) => return report(out, line, &error),
    };
    writeln!(
        out,
        "Object: {:?} (length: {})",
        program.words(),
        program.len()
    )?;
    if options.listing {
        write!(out, "{}", program)?;
    }
    out.flush()?;
    let mut argv = [Val::Absent];
    if let Err(error) = runtime.execute(&program, &mut argv) {
        return report(out, line, &error);
    }
    match (argv[0], Routine::resolve("printInt")) {
        (Val::Integer(n), Some(print_int)) => {
            let mut args = [Val::Routine(print_int), Val::Integer(n)];
            if let Err(error) = print_int.call(out, 2, &mut args) {
                return report(out, line, &error);
            }
        }
        (val, _) => writeln!(out, "{}", val)?,
    }
    out.flush()
}

fn report(out: &mut impl Write, line: &str, error: &Error) -> std::io::Result<()> {
    if error.kind() == ErrorKind::Compile {
        writeln!(out, "{}", decorate(line, &error.column()))?;
    }
    writeln!(out, "{}", Style::new().bold().paint(error.to_string()))?;
    out.flush()
}

fn decorate(line: &str, column: &Column) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    let mut index = 0;
    for (pos, ch) in line.char_indices() {
        let do_under = column.contains(&pos);
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(ch);
        index = pos + ch.len_utf8();
    }
    if column.start == index && !under_on {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}
