#![allow(clippy::uninlined_format_args)]

use rbregex::{Flags, MatchData, Regexp};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "rbregex-tool")]
struct Opt {
    /// The regular expression.
    pattern: String,

    /// The flags of the regular expression: i/x/m letters or a bitmask.
    #[structopt(long, short)]
    flags: Option<Flags>,

    /// Byte offset to start searching from.
    #[structopt(long, default_value = "0")]
    start: usize,

    /// Print the version of the linked engine and exit.
    #[structopt(long)]
    engine_version: bool,

    /// The input values to match against.
    #[structopt(conflicts_with_all = &["bench", "file"])]
    inputs: Vec<String>,

    /// Match against the contents of a specified file.
    #[structopt(long, conflicts_with_all = &["bench", "inputs"])]
    file: Option<PathBuf>,

    /// Benchmark the matches of the specified file.
    #[structopt(long, conflicts_with_all = &["file", "inputs"])]
    bench: Option<PathBuf>,
}

fn format_match(m: &MatchData) -> String {
    let mut result = String::new();
    let range = m.range();
    result.push_str(&format!("\"{}\" ({}..{})", m, range.start, range.end));
    let captures = m.captures();
    if !captures.is_empty() {
        result.push_str(", captures: [");
        for (i, capture) in captures.iter().enumerate() {
            if i > 0 {
                result.push_str(", ");
            }
            match capture {
                Some(text) => result.push_str(&format!("\"{}\"", text)),
                None => result.push_str("None"),
            }
        }
        result.push(']');
    }
    result
}

fn exec_re_on_string(re: &Regexp, input: &str, start: usize) {
    let mut matches = re.find_iter_from(input, start);
    match matches.next() {
        Some(Ok(m)) => {
            let count = 1 + matches.filter(Result::is_ok).count();
            println!("Match: {}, total: {}", format_match(&m), count);
        }
        Some(Err(err)) => eprintln!("{}", err),
        None => println!("No match"),
    }
}

fn bench_re_on_path(re: &Regexp, path: &Path) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            println!("{}: {}", err, path.display());
            return;
        }
    };
    let input = contents.as_str();
    // Warmup
    re.find_iter(input).count();
    let start = Instant::now();
    for _ in 0..25 {
        re.find_iter(input).count();
    }
    let duration = start.elapsed();
    println!("{} ms", duration.as_millis());
}

fn main() {
    let opt = Opt::from_args();
    if opt.engine_version {
        println!("{}", rbregex::version());
        return;
    }

    let flags = opt.flags.unwrap_or_default();
    let re = match Regexp::with_flags(&opt.pattern, flags) {
        Ok(re) => re,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    if let Some(path) = &opt.bench {
        bench_re_on_path(&re, path);
        return;
    }
    if let Some(path) = &opt.file {
        match fs::read_to_string(path) {
            Ok(contents) => exec_re_on_string(&re, &contents, opt.start),
            Err(err) => {
                eprintln!("{}: {}", err, path.display());
                std::process::exit(1);
            }
        }
        return;
    }
    for input in &opt.inputs {
        exec_re_on_string(&re, input, opt.start);
    }
}
