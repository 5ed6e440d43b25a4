mod calldata;
mod fetch_error;
mod swap_request;

pub use calldata::{CalldataPayload, ErrorPayload, CALLDATA_PAYLOAD_OFFSET};
pub use fetch_error::FetchError;
pub use swap_request::SwapRequest;
