//! Find and score all words on a board.
//!
//! Usage: `cargo run --example wordsearch -- <wordfile> [tiles] [min_len] [words...]`
//!
//! `tiles` is a comma separated list of N x N tiles in row-major order, for example
//! `E,E,C,A,A,L,E,P,H,N,B,O,Q,T,T,Y`. Use `-` for the default board.
//! Set `RUST_LOG=debug` to see what the search is doing.
use anyhow::{Context, Result};
use std::env;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use wordsearch_solver::WordSearchGame;

const WORDFILE: &str = "wordlists/words-small.txt";
const MIN_LEN: usize = 3;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args: Vec<String> = env::args().skip(1).collect();
    let wordfile = args.get(0).map_or(WORDFILE, String::as_str);

    let t0 = Instant::now();
    let mut game = WordSearchGame::new().with_lexicon_from_file(wordfile)?;
    if let Some(lexicon) = game.lexicon() {
        println!("{} in {:?}", lexicon, t0.elapsed());
    }
    if let Some(tiles) = args.get(1).filter(|t| t.as_str() != "-") {
        let tiles: Vec<&str> = tiles.split(',').map(str::trim).collect();
        game.set_board(&tiles)?;
    }
    let min_len = match args.get(2) {
        Some(n) => n
            .parse()
            .with_context(|| format!("invalid minimum word length '{}'", n))?,
        None => MIN_LEN,
    };
    println!("{}", game);

    let t0 = Instant::now();
    let words = game.all_scorable_words(min_len)?;
    let dt = t0.elapsed();
    let words: Vec<&String> = words.iter().collect();
    println!("{} words of {}+ letters in {:?}", words.len(), min_len, dt);
    for word in &words {
        println!("{:>12} {:?}", word, game.is_on_board(word)?);
    }
    println!("Total score: {}", game.score_for_words(&words, min_len)?);

    let extra = &args[args.len().min(3)..];
    if !extra.is_empty() {
        for word in extra {
            println!("{:>12} {:?}", word, game.is_on_board(word)?);
        }
        println!("Score: {}", game.score_for_words(extra, min_len)?);
    }
    Ok(())
}
