//! Sign command: append `pbs`/`pbe`/`pbt` to a URL.

use anyhow::Result;
use pburl_core::sign_url;

pub fn run_sign(url: &str, expiry: u64, access_key: &str, token: &str) -> Result<()> {
    let signed = sign_url(url, expiry, access_key, token)?;
    println!("{}", signed);
    Ok(())
}
