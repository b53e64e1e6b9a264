//! Command-line interface for `saes`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use saes_core::{decrypt_trace, encrypt_trace, expand_key, key_expansion, SaesKey, Stage};
use saes_runtime::SaesCipher;

/// Fixed cases printed by `saes demo`: (key, plaintext).
const DEMO_CASES: [(u16, u16); 2] = [(0xABCD, 0x1234), (0x4AF5, 0xB1D3)];

/// Simplified-AES CLI.
#[derive(Parser)]
#[command(
    name = "saes",
    version,
    author,
    about = "Simplified AES (16-bit block, 16-bit key) toy cipher"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a single 16-bit block.
    Encrypt {
        /// Key as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Print the state after every stage.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Decrypt a single 16-bit block.
    Decrypt {
        /// Key as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Print the state after every stage.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Print the round keys derived from a key.
    Keys {
        /// Key as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt a file of 2-byte blocks.
    Enc {
        /// Key as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (length must be even).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file of 2-byte blocks.
    Dec {
        /// Key as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (ciphertext).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Verify decryption inverts encryption for random keys and blocks.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 1024)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt and decrypt the built-in sample cases.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            key_hex,
            block_hex,
            trace,
        } => cmd_block(&key_hex, &block_hex, trace, Direction::Encrypt),
        Commands::Decrypt {
            key_hex,
            block_hex,
            trace,
        } => cmd_block(&key_hex, &block_hex, trace, Direction::Decrypt),
        Commands::Keys { key_hex } => cmd_keys(&key_hex),
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_file(&key_hex, &input, &output, Direction::Encrypt),
        Commands::Dec {
            key_hex,
            input,
            output,
        } => cmd_file(&key_hex, &input, &output, Direction::Decrypt),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo => cmd_demo(),
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn cmd_block(key_hex: &str, block_hex: &str, trace: bool, direction: Direction) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_u16_hex(block_hex).context("parse block")?;
    let round_keys = expand_key(&key);
    let steps: Vec<(Stage, u16)> = match direction {
        Direction::Encrypt => encrypt_trace(block, &round_keys),
        Direction::Decrypt => decrypt_trace(block, &round_keys),
    };
    if trace {
        println!("{:<24} 0x{:04X}", "input", block);
        for (stage, state) in &steps {
            println!("{:<24} 0x{:04X}", stage.to_string(), state);
        }
    }
    let Some(&(_, result)) = steps.last() else {
        bail!("pipeline produced no stages");
    };
    println!("0x{:04X}", result);
    Ok(())
}

fn cmd_keys(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let (round_key1, round_key2) = key_expansion(key.0);
    println!("round_key1: 0x{:04X}", round_key1);
    println!("round_key2: 0x{:04X}", round_key2);
    Ok(())
}

fn cmd_file(
    key_hex: &str,
    input_path: &PathBuf,
    output_path: &PathBuf,
    direction: Direction,
) -> Result<()> {
    let cipher = SaesCipher::new(parse_key_hex(key_hex)?);
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let processed = match direction {
        Direction::Encrypt => cipher.encrypt_in_place(&mut data),
        Direction::Decrypt => cipher.decrypt_in_place(&mut data),
    };
    processed.with_context(|| format!("process {}", input_path.display()))?;
    fs::write(output_path, data).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let key = SaesKey(rng.gen());
        let block: u16 = rng.gen();
        let cipher = SaesCipher::new(key);
        let ciphertext = cipher.encrypt_block(block);
        if cipher.decrypt_block(ciphertext) != block {
            bail!(
                "round trip failed for key 0x{:04X}, block 0x{:04X}",
                key.0,
                block
            );
        }
    }
    println!("{} samples round-tripped", samples);
    Ok(())
}

fn cmd_demo() -> Result<()> {
    for (idx, &(key, plaintext)) in DEMO_CASES.iter().enumerate() {
        let cipher = SaesCipher::new(SaesKey(key));
        let ciphertext = cipher.encrypt_block(plaintext);
        let decrypted = cipher.decrypt_block(ciphertext);
        if idx > 0 {
            println!();
        }
        println!("case {}:", idx + 1);
        println!("key: 0x{:04X}", key);
        println!("plaintext: 0x{:04X}", plaintext);
        println!("ciphertext: 0x{:04X}", ciphertext);
        println!("decrypted: 0x{:04X}", decrypted);
        println!("decryption successful: {}", decrypted == plaintext);
        if decrypted != plaintext {
            bail!("demo roundtrip failed");
        }
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<SaesKey> {
    let key = parse_u16_hex(hex_str).context("parse key")?;
    Ok(SaesKey(key))
}

/// Parses exactly two bytes of hex, with an optional `0x` prefix.
fn parse_u16_hex(hex_str: &str) -> Result<u16> {
    let trimmed = hex_str.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(digits).context("decode hex")?;
    if bytes.len() != 2 {
        bail!("expected 2 bytes (4 hex characters), got {}", bytes.len());
    }
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_hex_with_and_without_prefix() {
        assert_eq!(parse_u16_hex("abcd").expect("hex"), 0xABCD);
        assert_eq!(parse_u16_hex("0xA73B").expect("hex"), 0xA73B);
        assert_eq!(parse_u16_hex(" 0X00ff ").expect("hex"), 0x00FF);
    }

    #[test]
    fn rejects_wrong_width_and_bad_digits() {
        assert!(parse_u16_hex("abc").is_err());
        assert!(parse_u16_hex("abcdef").is_err());
        assert!(parse_u16_hex("zzzz").is_err());
        assert!(parse_key_hex("").is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(42));
        let mut b = seeded_rng(Some(42));
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn parses_encrypt_subcommand() {
        let cli = Cli::try_parse_from([
            "saes",
            "encrypt",
            "--key-hex",
            "A73B",
            "--block-hex",
            "6F6B",
            "--trace",
        ])
        .expect("valid arguments");
        match cli.command {
            Commands::Encrypt {
                key_hex,
                block_hex,
                trace,
            } => {
                assert_eq!(key_hex, "A73B");
                assert_eq!(block_hex, "6F6B");
                assert!(trace);
            }
            _ => panic!("expected encrypt"),
        }
    }

    #[test]
    fn demo_and_check_succeed() {
        cmd_demo().expect("demo");
        cmd_check(64, Some(1)).expect("check");
    }
}
