//! Command-line interface for tamil-tokenizer
//!
//! Usage:
//!   tamil-tok [OPTIONS] <TEXT>
//!   echo "தமிழ் மொழி" | tamil-tok
//!
//! Options:
//!   -m, --method <METHOD>  words, sentences, characters, graphemes, syllables
//!   -s, --stats            Print text statistics
//!   -a, --analyze          Analyze the structure of each word
//!   -c, --clean            Clean the text
//!   -p, --remove-punct     Remove punctuation (implies --clean)
//!   -n, --normalize        Normalize the text
//!   -j, --json             Output as JSON
//!   -h, --help             Show help

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use tamil_tokenizer::{ConjunctMode, Method, Tokenizer, TokenizerConfig};
use tracing_subscriber::EnvFilter;

fn print_help() {
    eprintln!(
        r#"tamil-tok - A Tamil script tokenizer

USAGE:
    tamil-tok [OPTIONS] [TEXT]
    echo "தமிழ் மொழி" | tamil-tok

OPTIONS:
    -m, --method <METHOD>  words, sentences, characters, graphemes, syllables
    -s, --stats            Print text statistics
    -a, --analyze          Analyze the structure of each word
    -c, --clean            Clean the text (collapse whitespace)
    -p, --remove-punct     Remove punctuation while cleaning (implies --clean)
    -n, --normalize        Normalize the text
        --split-conjuncts  Do not join consonant + virama + consonant
        --config <FILE>    Read tokenizer configuration from a JSON file
    -j, --json             Output as JSON
    -h, --help             Show this help message

EXAMPLES:
    tamil-tok "தமிழ் மொழி அழகான மொழி"
    tamil-tok -m graphemes "வணக்கம்"
    tamil-tok -s -j "வணக்கம். நலமா?"
    echo "தமிழ்   மொழி!" | tamil-tok -p
"#
    );
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Tokenize(Option<Method>),
    Stats,
    Analyze,
    Clean,
    Normalize,
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    mode: Option<Mode>,
    remove_punct: bool,
    split_conjuncts: bool,
    json_output: bool,
    config_path: Option<String>,
    text: Option<String>,
    help: bool,
}

/// Parse the arguments following the program name.
///
/// `-p` only applies to cleaning: on its own it selects `--clean`, and it is
/// rejected together with any other mode.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                opts.help = true;
                return Ok(opts);
            }
            "-m" | "--method" => {
                i += 1;
                let name = args.get(i).ok_or("--method requires a value")?;
                let method = name.parse::<Method>().map_err(|e| e.to_string())?;
                opts.mode = Some(Mode::Tokenize(Some(method)));
            }
            "-s" | "--stats" => opts.mode = Some(Mode::Stats),
            "-a" | "--analyze" => opts.mode = Some(Mode::Analyze),
            "-c" | "--clean" => opts.mode = Some(Mode::Clean),
            "-n" | "--normalize" => opts.mode = Some(Mode::Normalize),
            "-p" | "--remove-punct" => opts.remove_punct = true,
            "--split-conjuncts" => opts.split_conjuncts = true,
            "-j" | "--json" => opts.json_output = true,
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a file path")?;
                opts.config_path = Some(path.clone());
            }
            arg if !arg.starts_with('-') => {
                opts.text = Some(arg.to_string());
            }
            arg => return Err(format!("unknown option: {}", arg)),
        }
        i += 1;
    }

    if opts.remove_punct {
        match opts.mode {
            None => opts.mode = Some(Mode::Clean),
            Some(Mode::Clean) => {}
            Some(_) => return Err("--remove-punct can only be used with --clean".to_string()),
        }
    }

    Ok(opts)
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", msg);
    process::exit(1);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(format!("serializing to JSON: {}", e)),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            process::exit(1);
        }
    };
    if opts.help {
        print_help();
        return;
    }

    let Options {
        mode,
        remove_punct,
        split_conjuncts,
        json_output,
        config_path,
        text,
        ..
    } = opts;
    let mode = mode.unwrap_or(Mode::Tokenize(None));

    let mut config = match config_path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| fail(format!("reading config file '{}': {}", path, e)));
            TokenizerConfig::from_json(&content)
                .unwrap_or_else(|e| fail(format!("parsing config file '{}': {}", path, e)))
        }
        None => TokenizerConfig::default(),
    };
    if split_conjuncts {
        config.conjuncts = ConjunctMode::Split;
    }
    if remove_punct {
        config.remove_punctuation = true;
    }
    tracing::debug!(?config, "loaded configuration");

    // Read from stdin if no text provided
    let input_text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                fail(format!("reading stdin: {}", e));
            }
            buf
        }
    };

    let tokenizer = Tokenizer::with_config(config);

    match mode {
        Mode::Tokenize(method) => {
            let method = method.unwrap_or(config.default_method);
            let tokens = tokenizer
                .tokenize_spans(&input_text, method)
                .unwrap_or_else(|e| fail(e));
            if json_output {
                print_json(&tokens);
            } else {
                for token in &tokens {
                    println!("{}", token.text);
                }
            }
        }
        Mode::Stats => {
            let stats = tokenizer
                .get_statistics(&input_text)
                .unwrap_or_else(|e| fail(e));
            if json_output {
                print_json(&stats);
            } else {
                println!("total_characters\t{}", stats.total_characters);
                println!("tamil_characters\t{}", stats.tamil_characters);
                println!("words\t{}", stats.words);
                println!("sentences\t{}", stats.sentences);
                println!("average_word_length\t{:.2}", stats.average_word_length);
                println!("average_sentence_length\t{:.2}", stats.average_sentence_length);
                println!("conjunct_count\t{}", stats.conjunct_count);
                println!("vowel_sign_count\t{}", stats.vowel_sign_count);
            }
        }
        Mode::Analyze => {
            let words = tokenizer
                .segment_words(&input_text)
                .unwrap_or_else(|e| fail(e));
            let mut rows = Vec::with_capacity(words.len());
            for word in words {
                let structure = tokenizer.analyze_word(&word).unwrap_or_else(|e| fail(e));
                rows.push((word, structure));
            }
            if json_output {
                print_json(&rows);
            } else {
                for (word, s) in &rows {
                    println!(
                        "{}\tconsonants={}\tvowel_signs={}\tsyllables={}\tconjunct={}",
                        word, s.consonant_count, s.vowel_sign_count, s.syllable_count, s.has_conjunct
                    );
                }
            }
        }
        Mode::Clean | Mode::Normalize => {
            let result = if matches!(mode, Mode::Clean) {
                tokenizer.clean_default(&input_text)
            } else {
                tokenizer.normalize(&input_text)
            };
            let cleaned = result.unwrap_or_else(|e| fail(e));
            if json_output {
                print_json(&cleaned);
            } else {
                println!("{}", cleaned);
            }
        }
    }
}
