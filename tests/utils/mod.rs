use httpmock::prelude::HttpMockRequest;

const SWAP_KEYS: [&str; 9] = [
    "amount",
    "compatibility",
    "disableEstimate",
    "dst",
    "from",
    "protocols",
    "receiver",
    "slippage",
    "src",
];

// Every swap key exactly once and nothing else on the query string
pub fn has_exactly_swap_keys(req: &HttpMockRequest) -> bool {
    let mut keys: Vec<&str> = req
        .query_params
        .as_ref()
        .map(|params| params.iter().map(|(key, _)| key.as_str()).collect())
        .unwrap_or_default();
    keys.sort_unstable();
    keys == SWAP_KEYS
}
