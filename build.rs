//! Build script to embed the default word lists
//!
//! Turns the newline-separated lists under `data/` into const string slices so the
//! binary can start a puzzle without any files next to it.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Every acceptable guess
    generate_word_list(
        "data/allwords.txt",
        &Path::new(&out_dir).join("all_words.rs"),
        "ALL_WORDS",
        "Every acceptable five-letter guess",
    );

    // Decoy pool
    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("common_words.rs"),
        "COMMON_WORDS",
        "Common five-letter words used to build decoy rows",
    );

    println!("cargo:rerun-if-changed=data/allwords.txt");
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines and comments never reach the binary; length filtering is left
    // to the runtime loader so embedded and on-disk lists behave the same.
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
