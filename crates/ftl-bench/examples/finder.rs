//! Interactive substring finder.
//!
//! Prompts for a text, a pattern and whether case matters, then prints
//! every match position and the total.

use std::io::{self, BufRead, Write};

use ftl_algorithms::{find_all, CaseSensitivity};

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let text = prompt(&mut input, "Enter the text: ")?;
    let pattern = prompt(&mut input, "Enter a character or substring to find: ")?;
    let answer = prompt(&mut input, "Consider text case (y/n): ")?;

    let case = match answer.trim().chars().next() {
        Some('n' | 'N') => CaseSensitivity::Insensitive,
        _ => CaseSensitivity::Sensitive,
    };

    let matches = find_all(&text, &pattern, case);
    if matches.is_empty() {
        println!("No matches found.");
        return Ok(());
    }
    for index in &matches {
        println!("\tMatch at index: {index}");
    }
    println!("Total matches: {}", matches.len());
    Ok(())
}
