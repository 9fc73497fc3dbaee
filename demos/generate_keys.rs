//! Generates an RSA key pair and prints both PEM blocks: keep the private key
//! secret, register the public key with GroupVAN.

// crates.io
use color_eyre::Result;
// self
use groupvan_client::auth;

fn main() -> Result<()> {
	color_eyre::install()?;

	let key_pair = auth::generate_key_pair(2_048)?;

	println!("Private key (keep this secret!):\n{}", key_pair.private_key.expose());
	println!("Public key (register with GroupVAN):\n{}", key_pair.public_key);

	Ok(())
}
