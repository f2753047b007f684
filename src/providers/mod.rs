pub mod coinbase;

pub use coinbase::CoinbaseProvider;
