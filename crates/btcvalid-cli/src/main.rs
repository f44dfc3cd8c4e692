use anyhow::{bail, Context};
use btcvalid_address::{
    decode_address, versions_for, AddressType, DecodedAddress, Network, DEFAULT_VERSIONS,
};
use btcvalid_core::EncodingError;
use clap::Parser;
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(
    name = "btcvalid",
    about = "Validate Bitcoin Base58Check addresses"
)]
struct Args {
    /// Also accept testnet version bytes
    #[arg(long = "testnet", default_value_t = false)]
    testnet: bool,

    /// Also accept P2SH version bytes
    #[arg(long = "p2sh", default_value_t = false)]
    p2sh: bool,

    /// Explicit allow-list of version bytes in hex (comma-separated, e.g. "00,6f").
    /// Overrides --testnet and --p2sh.
    #[arg(long = "version-byte", value_delimiter = ',')]
    version_bytes: Vec<String>,

    /// Print nothing; report through the exit status only
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    quiet: bool,

    /// Addresses to check. Read one per line from stdin when none are given.
    #[arg()]
    addresses: Vec<String>,
}

/// Parse one hex version byte, with or without a 0x prefix.
fn parse_version_byte(text: &str) -> anyhow::Result<u8> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || digits.len() > 2 {
        bail!("invalid version byte '{}': expected 1-2 hex digits", text);
    }
    u8::from_str_radix(digits, 16)
        .with_context(|| format!("invalid version byte '{}'", text))
}

/// Build the version-byte allow-list from CLI flags.
fn allowed_versions(args: &Args) -> anyhow::Result<Vec<u8>> {
    if !args.version_bytes.is_empty() {
        let mut out = Vec::with_capacity(args.version_bytes.len());
        for v in &args.version_bytes {
            let byte = parse_version_byte(v)?;
            if !out.contains(&byte) {
                out.push(byte);
            }
        }
        return Ok(out);
    }

    if !args.testnet && !args.p2sh {
        return Ok(DEFAULT_VERSIONS.to_vec());
    }

    let mut networks = vec![Network::Mainnet];
    if args.testnet {
        networks.push(Network::Testnet);
    }
    let mut addr_types = vec![AddressType::P2PKH];
    if args.p2sh {
        addr_types.push(AddressType::P2SH);
    }
    Ok(versions_for(&networks, &addr_types))
}

/// Addresses from the command line, or from stdin (blank lines skipped).
fn collect_addresses(args: &Args) -> anyhow::Result<Vec<String>> {
    if !args.addresses.is_empty() {
        return Ok(args.addresses.clone());
    }

    let mut out = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read address from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    Ok(out)
}

fn describe(decoded: &DecodedAddress) -> String {
    match (decoded.network(), decoded.address_type()) {
        (Some(network), Some(addr_type)) => format!("{} {}", network, addr_type),
        _ => "unknown".to_string(),
    }
}

/// Print a verdict in a consistent, user-facing format.
fn print_result(address: &str, result: &Result<DecodedAddress, EncodingError>) {
    match result {
        Ok(decoded) => {
            println!("{}: valid", address);
            println!("  Version:  {:#04x} ({})", decoded.version, describe(decoded));
            println!("  Hash160:  {}", hex::encode(decoded.hash160));
        }
        Err(err) => println!("{}: invalid ({})", address, err),
    }
}

fn main() {
    let args = Args::parse();

    let allowed = match allowed_versions(&args) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(2);
        }
    };

    let addresses = match collect_addresses(&args) {
        Ok(a) => a,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(2);
        }
    };

    if addresses.is_empty() {
        eprintln!("Error: no addresses given");
        std::process::exit(2);
    }

    let mut invalid = 0usize;
    for address in &addresses {
        let result = decode_address(address, &allowed);
        if result.is_err() {
            invalid += 1;
        }
        if !args.quiet {
            print_result(address, &result);
        }
    }

    if invalid > 0 {
        if !args.quiet {
            eprintln!("{} of {} address(es) invalid", invalid, addresses.len());
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["btcvalid"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_parse_version_byte() {
        assert_eq!(parse_version_byte("00").unwrap(), 0x00);
        assert_eq!(parse_version_byte("6f").unwrap(), 0x6f);
        assert_eq!(parse_version_byte("0xC4").unwrap(), 0xc4);
        assert_eq!(parse_version_byte(" 5 ").unwrap(), 0x05);
    }

    #[test]
    fn test_parse_version_byte_rejects_garbage() {
        assert!(parse_version_byte("").is_err());
        assert!(parse_version_byte("0x").is_err());
        assert!(parse_version_byte("100").is_err());
        assert!(parse_version_byte("zz").is_err());
    }

    #[test]
    fn test_default_allow_list() {
        assert_eq!(allowed_versions(&args(&["addr"])).unwrap(), vec![0x00]);
    }

    #[test]
    fn test_testnet_and_p2sh_flags() {
        assert_eq!(
            allowed_versions(&args(&["--testnet", "addr"])).unwrap(),
            vec![0x00, 0x6f]
        );
        assert_eq!(
            allowed_versions(&args(&["--p2sh", "addr"])).unwrap(),
            vec![0x00, 0x05]
        );
        assert_eq!(
            allowed_versions(&args(&["--testnet", "--p2sh", "addr"])).unwrap(),
            vec![0x00, 0x05, 0x6f, 0xc4]
        );
    }

    #[test]
    fn test_explicit_version_bytes_override_flags() {
        assert_eq!(
            allowed_versions(&args(&["--testnet", "--version-byte", "05,05,6f", "addr"])).unwrap(),
            vec![0x05, 0x6f]
        );
    }

    #[test]
    fn test_positional_addresses_collected() {
        let a = args(&["1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2", "1111111111111111111114oLvT2"]);
        assert_eq!(collect_addresses(&a).unwrap().len(), 2);
    }

    #[test]
    fn test_describe() {
        let decoded = decode_address("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2", DEFAULT_VERSIONS).unwrap();
        assert_eq!(describe(&decoded), "mainnet p2pkh");

        let unknown = DecodedAddress {
            version: 0x30,
            hash160: [0; 20],
        };
        assert_eq!(describe(&unknown), "unknown");
    }
}
