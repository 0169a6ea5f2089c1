//! URL fragment encoding and decoding from the command line.

use anyhow::anyhow;
use clap::Subcommand;
use pvis_core::fragment::{decode, encode, FragmentState, FragmentStore, MemoryFragment};

#[derive(Subcommand)]
pub enum FragmentCommand {
    /// Print the key/value pairs of a fragment
    Decode {
        /// Fragment, with or without the leading '#'
        fragment: String,
    },

    /// Build a fragment from KEY=VALUE pairs
    Encode {
        /// Unescaped pairs; only the first '=' separates key from value
        pairs: Vec<String>,
    },

    /// Set one key in an existing fragment and print the result
    Set {
        fragment: String,
        key: String,
        value: String,
    },
}

/// Decoded pairs as `key = value` lines.
pub fn decode_lines(fragment: &str) -> Vec<String> {
    decode(fragment)
        .into_iter()
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect()
}

pub fn encode_pairs(pairs: &[String]) -> anyhow::Result<String> {
    let state = pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| anyhow!("expected KEY=VALUE, got {:?}", pair))
        })
        .collect::<anyhow::Result<FragmentState>>()?;
    Ok(encode(&state))
}

/// Apply a single `set` to `fragment`.
pub fn set_in(fragment: &str, key: &str, value: &str) -> String {
    let store = FragmentStore::new(MemoryFragment::new(fragment));
    store.set(key, value);
    encode(&store.load())
}

pub fn run_fragment(command: FragmentCommand) -> anyhow::Result<()> {
    match command {
        FragmentCommand::Decode { fragment } => {
            for line in decode_lines(&fragment) {
                println!("{}", line);
            }
        }
        FragmentCommand::Encode { pairs } => println!("#{}", encode_pairs(&pairs)?),
        FragmentCommand::Set {
            fragment,
            key,
            value,
        } => println!("#{}", set_in(&fragment, &key, &value)),
    }
    Ok(())
}
