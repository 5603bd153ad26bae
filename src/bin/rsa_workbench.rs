//! Minimal CLI front end for the `rsa_workbench` library.
//!
//! `encrypt` takes an input path and a key bit length, and writes
//! ciphertext plus a fresh public/private keypair. `decrypt` takes a
//! ciphertext path and a private-key path, and writes plaintext. `factor`
//! exposes the Pollard's rho demo directly on the command line.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::rngs::OsRng;

use rsa_workbench::cipher::DecryptPolicy;
use rsa_workbench::key_source::{resolve_private_key, KeySource};
use rsa_workbench::{keyfile, keygen};

#[derive(Parser)]
#[command(name = "rsa_workbench", about = "A from-scratch educational RSA cryptosystem")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a keypair and encrypt a file under the freshly generated public key.
    Encrypt {
        /// Path to the plaintext input file.
        #[arg(long)]
        input: PathBuf,
        /// Bit length of each of the two generated primes.
        #[arg(long, default_value_t = 1024)]
        bits: u64,
        /// Where to write the raw ciphertext.
        #[arg(long)]
        output: PathBuf,
        /// Where to write the two-line public key file.
        #[arg(long)]
        public_key: PathBuf,
        /// Where to write the four-line (CRT) private key file.
        #[arg(long)]
        private_key: PathBuf,
    },
    /// Decrypt a ciphertext file using a private key file.
    Decrypt {
        /// Path to the raw ciphertext input file.
        #[arg(long)]
        input: PathBuf,
        /// Path to a two- or four-line private key file. Omitting this
        /// demonstrates the "no key source given" failure mode.
        #[arg(long)]
        private_key: Option<PathBuf>,
        /// Where to write the recovered plaintext.
        #[arg(long)]
        output: PathBuf,
        /// Promote the first padding failure to a fatal error instead of
        /// skipping the offending block.
        #[arg(long)]
        strict: bool,
    },
    /// Attempt to factor `n` with Pollard's rho, to demonstrate the
    /// fragility of undersized moduli.
    Factor {
        /// The modulus to factor, as a decimal string.
        n: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encrypt {
            input,
            bits,
            output,
            public_key,
            private_key,
        } => run_encrypt(&input, bits, &output, &public_key, &private_key),
        Command::Decrypt {
            input,
            private_key,
            output,
            strict,
        } => run_decrypt(&input, private_key, &output, strict),
        Command::Factor { n } => run_factor(&n),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run_encrypt(
    input: &PathBuf,
    bits: u64,
    output: &PathBuf,
    public_key_path: &PathBuf,
    private_key_path: &PathBuf,
) -> Result<(), String> {
    let plaintext = fs::read(input).map_err(|e| format!("reading {}: {e}", input.display()))?;

    let mut rng = OsRng;
    let (public_key, private_key) = keygen::generate_keypair(&mut rng, bits)
        .map_err(|e| format!("key generation failed: {e}"))?;

    let ciphertext = rsa_workbench::encrypt_payload(&mut rng, &plaintext, &public_key)
        .map_err(|e| format!("encryption failed: {e}"))?;

    fs::write(output, &ciphertext).map_err(|e| format!("writing {}: {e}", output.display()))?;
    keyfile::write_public_key_file(public_key_path, &public_key)
        .map_err(|e| format!("writing {}: {e}", public_key_path.display()))?;
    keyfile::write_private_key_file(private_key_path, &private_key)
        .map_err(|e| format!("writing {}: {e}", private_key_path.display()))?;

    log::info!(
        "encrypted {} bytes into {} ({bits}-bit primes)",
        plaintext.len(),
        output.display()
    );

    Ok(())
}

fn run_decrypt(
    input: &PathBuf,
    private_key_path: Option<PathBuf>,
    output: &PathBuf,
    strict: bool,
) -> Result<(), String> {
    let ciphertext = fs::read(input).map_err(|e| format!("reading {}: {e}", input.display()))?;
    let private_key = resolve_private_key(private_key_path.map(KeySource::FromFile))
        .map_err(|e| format!("loading private key: {e}"))?;

    let policy = if strict {
        DecryptPolicy::Strict
    } else {
        DecryptPolicy::Lenient
    };

    let plaintext = rsa_workbench::decrypt_payload(&ciphertext, &private_key, policy)
        .map_err(|e| format!("decryption failed: {e}"))?;

    fs::write(output, &plaintext).map_err(|e| format!("writing {}: {e}", output.display()))?;

    log::info!("decrypted into {} ({} bytes)", output.display(), plaintext.len());

    Ok(())
}

fn run_factor(n: &str) -> Result<(), String> {
    let n: num_bigint::BigUint = n.parse().map_err(|_| "n must be a non-negative integer".to_string())?;

    let factor = rsa_workbench::pollards_rho(&n).map_err(|e| format!("{e}"))?;
    let cofactor = &n / &factor;

    println!("{factor} * {cofactor}");

    Ok(())
}
