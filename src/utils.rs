use ethers::types::H256;
use lazy_static::lazy_static;
use regex::Regex;

// Find the first `digits[.digits]` literal in free text
pub fn extract_amount(text: &str) -> Option<&str> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap();
    }

    RE.find(text).map(|m| m.as_str())
}

// Full 0x-prefixed hex form of a transaction hash
pub fn format_tx_hash(hash: &H256) -> String {
    format!("{:#x}", hash)
}

// Shorten hash for log lines
pub fn shorten_hash(hash: &H256) -> String {
    let full = format_tx_hash(hash);
    if full.len() <= 14 {
        return full;
    }

    let start = &full[..6];
    let end = &full[full.len() - 4..];

    format!("{}...{}", start, end)
}
