/// A coin offered in pickers and the `coins` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinInfo {
    /// CoinGecko id, e.g. `"bitcoin"`.
    pub id: &'static str,
    pub symbol: &'static str,
}

pub const POPULAR_COINS: &[CoinInfo] = &[
    CoinInfo { id: "bitcoin", symbol: "BTC" },
    CoinInfo { id: "ethereum", symbol: "ETH" },
    CoinInfo { id: "solana", symbol: "SOL" },
    CoinInfo { id: "dogecoin", symbol: "DOGE" },
    CoinInfo { id: "pepe", symbol: "PEPE" },
    CoinInfo { id: "ripple", symbol: "XRP" },
    CoinInfo { id: "binancecoin", symbol: "BNB" },
    CoinInfo { id: "cardano", symbol: "ADA" },
    CoinInfo { id: "avalanche-2", symbol: "AVAX" },
    CoinInfo { id: "chainlink", symbol: "LINK" },
];

/// Maps a ticker symbol or free-form search term to a CoinGecko id.
///
/// Known symbols resolve to their id; anything else is lowercased and passed
/// through, so full ids like `"Bitcoin"` also work.
pub fn resolve_coin_id(term: &str) -> String {
    let term = term.trim().to_lowercase();
    let id = match term.as_str() {
        "btc" => "bitcoin",
        "eth" => "ethereum",
        "sol" => "solana",
        "doge" => "dogecoin",
        "xrp" => "ripple",
        "pepe" => "pepe",
        "bnb" => "binancecoin",
        "ada" => "cardano",
        "avax" => "avalanche-2",
        "link" => "chainlink",
        "matic" => "matic-network",
        _ => return term,
    };
    id.to_string()
}
