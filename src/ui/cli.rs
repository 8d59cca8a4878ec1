// Command-line front end
// Parses parameters, invokes exactly one primitive and prints the result

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ToolkitConfig;
use crate::dh::DhParams;
use crate::hash::{hash_hex, HashAlgorithm};
use crate::number::{is_prime, is_primitive_root, BigNum};
use crate::rsa::{self, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
use crate::session::Session;
use crate::symmetric::{caesar, rc4, vernam, vigenere};
use crate::util::file_ops::{read_input, read_input_text, write_output};

/// Number theory and cipher toolkit
#[derive(Parser, Debug)]
#[command(name = "cipher_toolkit")]
#[command(about = "Primality, Diffie-Hellman, textbook RSA, RC4 and classical ciphers")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Text supplied inline or read from a file
#[derive(Args, Debug)]
struct TextInput {
    /// Text to process
    #[arg(required_unless_present = "input")]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deterministic primality test
    Prime { n: BigNum },

    /// Check whether g is a primitive root modulo the prime p
    PrimitiveRoot { g: BigNum, p: BigNum },

    /// Diffie-Hellman: publish A = g^a mod p, optionally agree on s = B^a mod p
    Dh {
        p: BigNum,
        g: BigNum,
        /// Private exponent a
        private: BigNum,
        /// Peer public value B
        #[arg(long)]
        peer: Option<BigNum>,
        /// Vigenere-encrypt this text under the key derived from the shared secret
        #[arg(long, requires = "peer")]
        encrypt: Option<String>,
        /// Vigenere-decrypt this text under the key derived from the shared secret
        #[arg(long, requires = "peer")]
        decrypt: Option<String>,
    },

    /// RSA key pair from primes p, q (or random primes of --bits) and exponent e
    RsaKeygen {
        #[arg(short, long, requires = "q", conflicts_with = "bits")]
        p: Option<BigNum>,
        #[arg(short, long, requires = "p")]
        q: Option<BigNum>,
        #[arg(short, long)]
        e: BigNum,
        /// Generate random primes for a modulus of this many bits
        #[arg(long, required_unless_present = "p")]
        bits: Option<u32>,
    },

    /// RSA-encode text with the public key (e, n)
    RsaEncode {
        #[arg(short, long)]
        e: BigNum,
        #[arg(short, long)]
        n: BigNum,
        #[command(flatten)]
        text: TextInput,
    },

    /// RSA-decode space-separated integers with the private key (d, n)
    RsaDecode {
        #[arg(short, long)]
        d: BigNum,
        #[arg(short, long)]
        n: BigNum,
        #[command(flatten)]
        text: TextInput,
    },

    /// RC4 encrypt/decrypt (the same operation)
    Rc4 {
        #[arg(short, long)]
        key: String,
        /// Treat the input as raw bytes and print the result as hex
        #[arg(long = "hex")]
        as_hex: bool,
        /// Input is hex (bytes mode only)
        #[arg(long, requires = "as_hex")]
        from_hex: bool,
        #[command(flatten)]
        text: TextInput,
    },

    /// Vigenere cipher with an alphabetic keyword
    Vigenere {
        #[arg(short, long)]
        keyword: String,
        #[arg(long)]
        decrypt: bool,
        #[command(flatten)]
        text: TextInput,
    },

    /// Vernam encryption; generates a key when none is given
    VernamEncrypt {
        #[arg(short, long)]
        key: Option<String>,
        #[command(flatten)]
        text: TextInput,
    },

    /// Vernam decryption of a numeric ciphertext
    VernamDecrypt {
        #[arg(short, long)]
        key: String,
        #[command(flatten)]
        text: TextInput,
    },

    /// Caesar shift cipher
    Caesar {
        #[arg(short, long, allow_hyphen_values = true)]
        shift: i64,
        #[arg(long)]
        decrypt: bool,
        #[command(flatten)]
        text: TextInput,
    },

    /// Message digest (sha256, md5, sha3-256, ripemd160)
    Hash {
        #[arg(short, long, default_value = "sha256")]
        algorithm: HashAlgorithm,
        #[command(flatten)]
        text: TextInput,
    },
}

impl TextInput {
    fn load(&self, config: &ToolkitConfig) -> anyhow::Result<String> {
        match (&self.text, &self.input) {
            (_, Some(path)) => Ok(read_input_text(path, config)?),
            (Some(text), None) => Ok(text.clone()),
            (None, None) => bail!("no text or input file given"),
        }
    }

    fn load_bytes(&self, config: &ToolkitConfig) -> anyhow::Result<Vec<u8>> {
        match (&self.text, &self.input) {
            (_, Some(path)) => Ok(read_input(path, config)?),
            (Some(text), None) => Ok(text.clone().into_bytes()),
            (None, None) => bail!("no text or input file given"),
        }
    }
}

/// Parse arguments, set up logging and run one command
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = ToolkitConfig::default();
    let result = execute(cli.command, &config)?;

    match cli.output {
        Some(path) => write_output(&path, result.as_bytes())?,
        None => println!("{}", result),
    }
    Ok(())
}

fn execute(command: Command, config: &ToolkitConfig) -> anyhow::Result<String> {
    let output = match command {
        Command::Prime { n } => format!("{} is {}prime", n, if is_prime(&n) { "" } else { "not " }),

        Command::PrimitiveRoot { g, p } => {
            let verdict = is_primitive_root(&g, &p)?;
            format!("{} is {}a primitive root modulo {}", g, if verdict { "" } else { "not " }, p)
        }

        Command::Dh { p, g, private, peer, encrypt, decrypt } => {
            let params = DhParams::with_config(p, g, config)?;
            let party = params.with_private_key(private)?;
            let mut lines = vec![format!("public key A = {}", party.public_key())];

            if let Some(peer) = peer {
                let mut session = Session::new();
                let secret = party.shared_secret(&peer);
                lines.push(format!("shared secret s = {}", secret));
                session.record(secret);

                if let Some(text) = encrypt {
                    lines.push(format!("encrypted: {}", session.encrypt_text(&text)?));
                }
                if let Some(text) = decrypt {
                    lines.push(format!("decrypted: {}", session.decrypt_text(&text)?));
                }
            }
            lines.join("\n")
        }

        Command::RsaKeygen { p, q, e, bits } => {
            let keypair = match (p, q, bits) {
                (Some(p), Some(q), _) => RsaKeyPair::from_primes(&p, &q, &e)?,
                (_, _, Some(bits)) => {
                    let e = u64::try_from(&e).context("random generation needs e to fit in 64 bits")?;
                    RsaKeyPair::generate_with_config(bits, e, config)?
                }
                _ => bail!("give both --p and --q, or --bits"),
            };
            format!(
                "n = {}\nt = {}\npublic key (e, n) = ({}, {})\nprivate key (d, n) = ({}, {})",
                keypair.n(),
                keypair.t(),
                keypair.e(),
                keypair.n(),
                keypair.d(),
                keypair.n()
            )
        }

        Command::RsaEncode { e, n, text } => {
            rsa::encode_to_string(&text.load(config)?, &RsaPublicKey::new(e, n))?
        }

        Command::RsaDecode { d, n, text } => {
            rsa::decode_str(&text.load(config)?, &RsaPrivateKey::new(d, n))?
        }

        Command::Rc4 { key, as_hex, from_hex, text } => {
            if as_hex {
                let data = text.load_bytes(config)?;
                let data = if from_hex {
                    hex::decode(String::from_utf8(data)?.trim()).context("input is not valid hex")?
                } else {
                    data
                };
                hex::encode(rc4::rc4_bytes(key.as_bytes(), &data)?)
            } else {
                rc4::rc4_text(&key, &text.load(config)?)?
            }
        }

        Command::Vigenere { keyword, decrypt, text } => {
            let text = text.load(config)?;
            if decrypt {
                vigenere::decrypt(&text, &keyword)?
            } else {
                vigenere::encrypt(&text, &keyword)?
            }
        }

        Command::VernamEncrypt { key, text } => {
            let text = text.load(config)?;
            match key {
                Some(key) => vernam::encrypt(&text, &key)?,
                None => {
                    let (key, ciphertext) = vernam::encrypt_with_generated_key(&text)?;
                    format!("key: {}\nciphertext: {}", key, ciphertext)
                }
            }
        }

        Command::VernamDecrypt { key, text } => vernam::decrypt(text.load(config)?.trim(), &key)?,

        Command::Caesar { shift, decrypt, text } => {
            let text = text.load(config)?;
            if decrypt {
                caesar::decrypt(&text, shift)
            } else {
                caesar::encrypt(&text, shift)
            }
        }

        Command::Hash { algorithm, text } => hash_hex(algorithm, &text.load_bytes(config)?),
    };

    Ok(output)
}
