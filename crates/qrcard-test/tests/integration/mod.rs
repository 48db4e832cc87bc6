mod encoding;
mod export;
mod helpers;
